//! End-to-end tests of the harvester against canned portal pages.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mweb::error::{AppError, Result};
use mweb::models::{AcademicLevel, CrawlerConfig};
use mweb::pipeline::run_snapshot;
use mweb::services::{Outcome, PrerequisiteResolver};
use mweb::utils::http::PageFetcher;
use mweb::Harvester;

const BASE: &str = "https://matriculaweb.unb.br/matriculaweb";

/// Serves pages from memory and records every requested URL.
#[derive(Default, Clone)]
struct CannedFetcher {
    pages: Arc<HashMap<String, String>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl CannedFetcher {
    fn with_pages(pages: &[(&str, String)]) -> Self {
        Self {
            pages: Arc::new(
                pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.clone()))
                    .collect(),
            ),
            requested: Arc::default(),
        }
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::status(url, 404))
    }
}

fn url(level: &str, page: &str, code: &str) -> String {
    format!("{BASE}/{level}/{page}.aspx?cod={code}")
}

fn departments_page() -> String {
    concat!(
        "<table>",
        "<tr CLASS=PadraoMenor bgcolor=#FFFFFF><td>116</td><td>CIC</td><td><a href=oferta_dis.aspx?cod=116>Departamento de Ciência da Computação</a></td></tr>",
        "<tr CLASS=PadraoMenor bgcolor=#E7F3D6><td>113</td><td>MAT</td><td><a href=oferta_dis.aspx?cod=113>Departamento de Matemática</a></td></tr>",
        "<tr CLASS=PadraoMenor bgcolor=#FFFFFF><td>116</td><td>CIC</td><td><a href=oferta_dis.aspx?cod=116>Ciência da Computação</a></td></tr>",
        "</table>",
    )
    .to_string()
}

fn courses_page() -> String {
    concat!(
        "<tr><td>116319</td><td><a href=oferta_dados.aspx?cod=116319&dep=116>ESTRUTURAS DE DADOS</a></td></tr>",
        "<tr><td>116424</td><td><a href=oferta_dados.aspx?cod=116424&dep=116>TRANSMISSÃO DE DADOS</a></td></tr>",
    )
    .to_string()
}

fn waitlist_page() -> String {
    concat!(
        "<table><tr><td><b>Turma</b></td>    <td><b>Vagas<br>Solicitadas</b></td>  </tr>",
        "<tr CLASS=PadraoMenor bgcolor=#E7F3D6>  <td align=center >T01</td>  <td align=center >0</td></tr>",
        "<tr CLASS=PadraoMenor bgcolor=#FFFFFF>  <td align=center >T02</td>  <td align=center >5</td></tr>",
        "<tr CLASS=PadraoBranco><td>Total</td></tr></table>",
    )
    .to_string()
}

fn prerequisites_page() -> String {
    "<tr><td valign=top><b>Pré-req:</b> </td><td class=PadraoMenor>117251 OU<br>116394 E 113042</td></tr>"
        .to_string()
}

fn sections_page() -> String {
    concat!(
        "<b>Turma</b></div><div align=center><font size=4><b>A</b></font></div>",
        "<td>Ocupadas</td><td><b><font color=green>0</font></b></td>",
        "<td><center>Fulano de Tal<br></center></td>",
        "<tr><td colspan=6 bgcolor=white height=20></td></tr>",
        "<b>Turma</b></div><div align=center><font size=4><b>B</b></font></div>",
        "<td>Ocupadas</td><td><b><font color=red>12</font></b></td>",
        "<td><center>Fulano de Tal<br>Beltrano Silva<br></center></td>",
        "<tr><td>Reserva para curso</td></tr><tr><td align=left>Engenharia de Computação</td></tr>",
        "<tr><td colspan=6 bgcolor=white height=20></td></tr>",
    )
    .to_string()
}

fn portal() -> CannedFetcher {
    CannedFetcher::with_pages(&[
        (url("graduacao", "oferta_dep", "1").as_str(), departments_page()),
        (url("graduacao", "oferta_dis", "116").as_str(), courses_page()),
        (url("graduacao", "faltavaga_rel", "116319").as_str(), waitlist_page()),
        (url("graduacao", "disciplina_pop", "116424").as_str(), prerequisites_page()),
        (url("graduacao", "oferta_dados", "116319").as_str(), sections_page()),
    ])
}

#[tokio::test]
async fn test_departments_collapse_duplicates() {
    let harvester = Harvester::new(portal());
    let departments = harvester
        .departments(AcademicLevel::Undergraduate, None)
        .await;

    assert_eq!(departments.len(), 2);
    assert_eq!(departments["116"].abbreviation, "CIC");
    assert_eq!(departments["116"].name, "Ciência da Computação");
    assert_eq!(departments["113"].name, "Departamento de Matemática");
}

#[tokio::test]
async fn test_courses_of_department() {
    let harvester = Harvester::new(portal());
    let courses = harvester.courses("116", AcademicLevel::Undergraduate).await;

    assert_eq!(courses.len(), 2);
    assert_eq!(courses["116424"], "TRANSMISSÃO DE DADOS");
}

#[tokio::test]
async fn test_waitlist_keeps_positive_counts() {
    let harvester = Harvester::new(portal());
    let demand = harvester
        .waitlist("116319", None, AcademicLevel::Undergraduate)
        .await;

    assert_eq!(demand.len(), 1);
    assert_eq!(demand["T02"], 5);
    assert!(demand.values().all(|count| *count > 0));
}

#[tokio::test]
async fn test_prerequisites_or_of_ands() {
    let harvester = Harvester::new(portal());
    let rule = harvester
        .prerequisites("116424", AcademicLevel::Undergraduate)
        .await;

    assert_eq!(
        serde_json::to_string(&rule).unwrap(),
        r#"[["117251"],["116394","113042"]]"#
    );
}

#[tokio::test]
async fn test_sections_skip_empty_and_read_reservation() {
    let harvester = Harvester::new(portal());
    let sections = harvester
        .sections("116319", AcademicLevel::Undergraduate)
        .await;

    assert_eq!(sections.keys().collect::<Vec<_>>(), ["B"]);
    let b = &sections["B"];
    assert_eq!(b.enrolled, 12);
    assert_eq!(b.instructors, ["Fulano de Tal", "Beltrano Silva"]);
    assert_eq!(b.reserved.as_deref(), Some("Engenharia de Computação"));
}

#[tokio::test]
async fn test_fetch_failure_yields_empty_results() {
    let harvester = Harvester::new(CannedFetcher::default());
    let level = AcademicLevel::Graduate;

    assert!(harvester.departments(level, None).await.is_empty());
    assert!(harvester.courses("116", level).await.is_empty());
    assert!(harvester.waitlist("116319", None, level).await.is_empty());
    assert!(harvester.prerequisites("116424", level).await.is_empty());
    assert!(harvester.sections("116319", level).await.is_empty());
}

#[tokio::test]
async fn test_invalid_filter_yields_empty_without_fetch() {
    let fetcher = portal();
    let harvester = Harvester::new(fetcher.clone());

    let departments = harvester
        .departments(AcademicLevel::Undergraduate, Some("(116"))
        .await;

    assert!(departments.is_empty());
    assert!(fetcher.requested().is_empty());
}

#[tokio::test]
async fn test_outcome_separates_failure_from_no_data() {
    let page = url("graduacao", "disciplina_pop", "113034");
    let fetcher = CannedFetcher::with_pages(&[(page.as_str(), "<html>sem requisitos</html>".to_string())]);
    let harvester = Harvester::new(fetcher);

    let present = PrerequisiteResolver::new("113034", AcademicLevel::Undergraduate).unwrap();
    assert!(matches!(harvester.extract(&present).await, Outcome::Empty));

    let missing = PrerequisiteResolver::new("999999", AcademicLevel::Undergraduate).unwrap();
    match harvester.extract(&missing).await {
        Outcome::Failed(e) => assert!(e.is_transport()),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_requests_use_portal_urls() {
    let fetcher = portal();
    let harvester = Harvester::new(fetcher.clone());

    harvester.courses("113", AcademicLevel::Graduate).await;
    harvester
        .waitlist("113476", Some("T01"), AcademicLevel::Undergraduate)
        .await;

    assert_eq!(
        fetcher.requested(),
        [
            "https://matriculaweb.unb.br/matriculaweb/posgraduacao/oferta_dis.aspx?cod=113",
            "https://matriculaweb.unb.br/matriculaweb/graduacao/faltavaga_rel.aspx?cod=113476",
        ]
    );
}

#[tokio::test]
async fn test_custom_base_url() {
    let page = "http://localhost:8080/mw/graduacao/oferta_dis.aspx?cod=116";
    let fetcher = CannedFetcher::with_pages(&[(page, courses_page())]);
    let harvester = Harvester::new(fetcher).with_base_url("http://localhost:8080/mw/");

    let courses = harvester.courses("116", AcademicLevel::Undergraduate).await;
    assert_eq!(courses.len(), 2);
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let harvester = Harvester::new(portal());
    let first = harvester.sections("116319", AcademicLevel::Undergraduate).await;
    let second = harvester.sections("116319", AcademicLevel::Undergraduate).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_department_snapshot() {
    let harvester = Harvester::new(portal());
    let config = CrawlerConfig {
        request_delay_ms: 0,
        max_concurrent: 2,
        ..CrawlerConfig::default()
    };

    let snapshot = run_snapshot(&harvester, &config, "116", AcademicLevel::Undergraduate).await;

    let codes: Vec<_> = snapshot.courses.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["116319", "116424"]);

    let structures = &snapshot.courses[0];
    assert_eq!(structures.sections.len(), 1);
    assert_eq!(structures.waitlist["T02"], 5);
    assert!(structures.prerequisites.is_empty());

    let transmission = &snapshot.courses[1];
    assert!(transmission.sections.is_empty());
    assert_eq!(transmission.prerequisites.groups().len(), 2);

    assert_eq!(snapshot.section_count(), 1);
    assert_eq!(snapshot.enrolled_count(), 12);
}
