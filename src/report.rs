//! HTMLレポート出力
//!
//! ブラウザ版と同じ2ペイン構成（プレビュー / 予測カード）で結果を静的HTMLに書き出す。

use crate::error::Result;
use crate::session::ClassificationRecord;
use std::path::Path;

pub fn render_html(records: &[ClassificationRecord], dark_mode: bool) -> String {
    let theme = if dark_mode { "dark" } else { "light" };

    let mut body = String::new();
    for record in records {
        body.push_str(&render_record(record));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Brain Tumor Classifier Report</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
body.light {{ background: #f5f7ff; color: #1f2937; }}
body.dark {{ background: #111827; color: #f9fafb; }}
.entry {{ display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-bottom: 2rem; }}
.entry img {{ width: 100%; height: 18rem; object-fit: cover; border-radius: 0.75rem; }}
.card {{ border-radius: 0.75rem; padding: 1.5rem; text-align: center; }}
body.light .card {{ background: #eff6ff; }}
body.dark .card {{ background: #374151; }}
.error {{ color: #dc2626; }}
</style>
</head>
<body class="{theme}">
<h1>🧠 Brain Tumor Classifier</h1>
{body}</body>
</html>
"#
    )
}

fn render_record(record: &ClassificationRecord) -> String {
    let mut html = String::from("<section class=\"entry\">\n");
    html.push_str(&format!("<h3>{}</h3>\n<div></div>\n", escape(&record.file_name)));

    match &record.preview {
        Some(preview) => html.push_str(&format!(
            "<div><img src=\"{}\" alt=\"Uploaded MRI\"></div>\n",
            escape(preview)
        )),
        None => html.push_str("<div></div>\n"),
    }

    if let Some(prediction) = &record.prediction {
        html.push_str(&format!(
            "<div class=\"card\"><h2>Prediction Result</h2><p><strong>{}</strong></p><p>{}</p></div>\n",
            escape(prediction),
            escape(record.description.as_deref().unwrap_or_default())
        ));
    } else if let Some(error) = &record.error {
        html.push_str(&format!("<div class=\"card error\">⚠️ {}</div>\n", escape(error)));
    }

    html.push_str("</section>\n");
    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn write_html(path: &Path, records: &[ClassificationRecord], dark_mode: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_html(records, dark_mode))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success() -> ClassificationRecord {
        ClassificationRecord {
            file_name: "brain1.png".to_string(),
            prediction: Some("Glioma Tumor".to_string()),
            description: Some("Gliomas <start> in glial cells.".to_string()),
            preview: Some("data:image/png;base64,YWJj".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_success_entry() {
        let html = render_html(&[success()], false);
        assert!(html.contains("<body class=\"light\">"));
        assert!(html.contains("src=\"data:image/png;base64,YWJj\""));
        assert!(html.contains("Prediction Result"));
        assert!(html.contains("Glioma Tumor"));
        assert!(html.contains("Gliomas &lt;start&gt; in glial cells."));
    }

    #[test]
    fn test_render_error_entry_keeps_preview() {
        let record = ClassificationRecord {
            file_name: "x.png".to_string(),
            error: Some("Unsupported file type".to_string()),
            preview: Some("data:image/png;base64,AAAA".to_string()),
            ..Default::default()
        };
        let html = render_html(&[record], true);
        assert!(html.contains("<body class=\"dark\">"));
        assert!(html.contains("⚠️ Unsupported file type"));
        assert!(html.contains("alt=\"Uploaded MRI\""));
        assert!(!html.contains("Prediction Result"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_write_html() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.html");
        write_html(&path, &[success()], false).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Glioma Tumor"));
    }
}
