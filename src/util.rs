use crate::model::Year;
use std::path::Path;

/// Treats missing and blank strings alike.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Drops blank values but leaves the rest untouched, for strings handed
/// to git as-is.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// The nickname if given, otherwise the author filter.
pub fn display_name<'a>(name: Option<&'a str>, author: Option<&'a str>) -> Option<&'a str> {
    non_blank(name).or_else(|| non_blank(author))
}

/// `git_{who}_{year}.stl`, or `git_{year}.stl` when nobody is named.
pub fn output_file_name(who: Option<&str>, year: Year) -> String {
    match non_blank(who) {
        Some(who) => {
            let who: String = who
                .chars()
                .map(|c| if c == '/' || c == '\\' { '_' } else { c })
                .collect();
            format!("git_{who}_{year}.stl")
        }
        None => format!("git_{year}.stl"),
    }
}

/// Directory name of the repository, used when no label is given.
pub fn repo_label(workdir: &Path) -> Option<String> {
    let canonical = workdir.canonicalize().ok()?;
    canonical
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
