// src/extract.rs - Scoped field lookups over rendered listing containers
use thirtyfour::{By, WebElement};

/// Trimmed text of the first descendant of `scope` matching `selector`.
/// Returns `None` when the listing has no such element; an element with no
/// text yields `Some("")`.
pub async fn scoped_text(scope: &WebElement, selector: &str) -> Option<String> {
    let element = scope.find(By::Css(selector)).await.ok()?;
    let text = element.text().await.ok()?;
    Some(text.trim().to_string())
}

/// Link target of the first descendant of `scope` matching `selector`,
/// resolved to an absolute URL by the browser (the `href` property, not the
/// raw attribute text).
pub async fn scoped_href(scope: &WebElement, selector: &str) -> Option<String> {
    let element = scope.find(By::Css(selector)).await.ok()?;
    element.prop("href").await.ok().flatten()
}
