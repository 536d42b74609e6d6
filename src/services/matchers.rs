// src/services/matchers.rs

//! Fragment matchers for the Matrícula Web markup.
//!
//! Every pattern the extractors depend on is built here, so a layout change
//! on the portal means editing one function. Patterns are matched against a
//! whole page without dot-all mode: `.` never crosses a line break, which
//! keeps a match inside the single-line table rows the portal emits.
//!
//! Caller supplied filters are spliced into a named group, so capturing
//! groups inside a filter do not shift the fields read by the extractors.
//! Filters may not declare named groups of their own.

use regex::Regex;

use crate::error::{AppError, Result};

/// Separator between OR alternatives in the prerequisite cell.
pub const OR_MARKER: &str = " OU<br>";

/// Separator between instructor names in a section block.
pub const INSTRUCTOR_SEPARATOR: &str = "<br>";

/// Compile a pattern, reporting failures as [`AppError::Pattern`].
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| AppError::pattern(pattern, e))
}

/// Row of the department listing: `code`, `abbreviation`, `name`.
pub fn department_row(code_filter: &str) -> Result<Regex> {
    check_filter(code_filter)?;
    compile(&format!(
        r"<tr CLASS=PadraoMenor bgcolor=.*?><td>(?P<code>(?:{code_filter}))</td><td>(?P<abbreviation>\w+)</td>.*?aspx\?cod=\d+>(?P<name>.*?)</a></td></tr>"
    ))
}

/// Link to a course offering: `code`, `name`.
pub fn course_link() -> Result<Regex> {
    compile(r"oferta_dados\.aspx\?cod=(?P<code>\d+).*?>(?P<name>.*?)</a>")
}

/// The "requested seats" table of the waitlist page.
pub fn waitlist_table() -> Result<Regex> {
    compile(concat!(
        r"<td><b>Turma</b></td>    ",
        r"<td><b>Vagas<br>Solicitadas</b></td>  </tr>",
        r"<tr CLASS=PadraoMenor bgcolor=.*?>  ",
        r".*?</tr><tr CLASS=PadraoBranco>",
    ))
}

/// Row of the requested seats table: `label`, `count`.
pub fn waitlist_row(label_filter: &str) -> Result<Regex> {
    check_filter(label_filter)?;
    compile(&format!(
        r"<td align=center >(?P<label>(?:{label_filter}))</td>  <td align=center >(?P<count>\d+)</td></tr>"
    ))
}

/// Prerequisite cell of the course detail page: `requirements`.
pub fn prerequisite_cell() -> Result<Regex> {
    compile(r"<td valign=top><b>Pré-req:</b> </td><td class=PadraoMenor>(?P<requirements>.*?)</td></tr>")
}

/// A six digit course code.
pub fn course_code() -> Result<Regex> {
    compile(r"\d{6}")
}

/// Section block of the offering page: `label`, `enrolled`, `instructors`
/// and, when seats are reserved for a program, `reserved`.
pub fn section_block() -> Result<Regex> {
    compile(concat!(
        r"<b>Turma</b>.*?<font size=4><b>(?P<label>\w+)</b></font></div>",
        r".*?",
        r"<td>Ocupadas</td>",
        r"<td><b><font color=(?:red|green)>(?P<enrolled>\d+)</font></b></td>",
        r".*?",
        r"<center>(?P<instructors>.*?)<br></center>",
        r".*?",
        r"(?:Reserva para curso.*?<td align=left>(?P<reserved>.*?)</td>.*?)?",
        r"<td colspan=6 bgcolor=white height=20>",
    ))
}

/// Reject filters that would not compile on their own or that declare named
/// groups, which could clash with the names the row patterns read.
///
/// Checked separately so the error names the caller's filter instead of the
/// whole row pattern.
fn check_filter(filter: &str) -> Result<()> {
    if filter.is_empty() {
        return Err(AppError::pattern(filter, "empty filter"));
    }
    let compiled = compile(filter)?;
    if let Some(name) = compiled.capture_names().flatten().next() {
        return Err(AppError::pattern(
            filter,
            format!("named group '{name}' is not allowed in a filter"),
        ));
    }
    Ok(())
}
