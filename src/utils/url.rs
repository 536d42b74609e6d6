// src/utils/url.rs

//! Page URL construction for the Matrícula Web portal.

use crate::models::{AcademicLevel, Page};

/// Default portal prefix.
pub const PORTAL_BASE: &str = "https://matriculaweb.unb.br/matriculaweb";

/// Build the address of a portal page.
///
/// The identifier is inserted verbatim, the portal expects the raw code.
///
/// # Examples
/// ```
/// use mweb::models::{AcademicLevel, Page};
/// use mweb::utils::url::{page_url, PORTAL_BASE};
///
/// assert_eq!(
///     page_url(PORTAL_BASE, AcademicLevel::Undergraduate, Page::Courses, "116"),
///     "https://matriculaweb.unb.br/matriculaweb/graduacao/oferta_dis.aspx?cod=116"
/// );
/// ```
pub fn page_url(base: &str, level: AcademicLevel, page: Page, code: &str) -> String {
    format!(
        "{}/{}/{}.aspx?cod={}",
        base.trim_end_matches('/'),
        level.as_path(),
        page.name(),
        code
    )
}
