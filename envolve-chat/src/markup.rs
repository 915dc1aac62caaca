use crate::{ApiKey, SCRIPT_LOADER_HOST};

/// Script tags that load the widget and hand it the signed command.
///
/// Without a command only the loader is emitted.
pub fn render_markup(api_key: &ApiKey, signed_command: Option<&str>) -> String {
    let mut js = vec![
        "<!-- Envolve Chat -->".to_string(),
        r#"<script type="text/javascript">"#.to_string(),
        format!("var envoSn={};", api_key.site_id()),
    ];
    if let Some(command) = signed_command {
        js.push(format!("env_commandString='{}';", command));
    }
    js.push(
        r#"var envProtoType = (("https:" == document.location.protocol) ? "https://" : "http://");"#
            .to_string(),
    );
    js.push(format!(
        r#"document.write(unescape("%3Cscript src='" + envProtoType + "{}' type='text/javascript'%3E%3C/script%3E"));"#,
        SCRIPT_LOADER_HOST
    ));
    js.push("</script>".to_string());
    js.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOADER_LINES: &str = r#"var envProtoType = (("https:" == document.location.protocol) ? "https://" : "http://");
document.write(unescape("%3Cscript src='" + envProtoType + "d.envolve.com/env.nocache.js' type='text/javascript'%3E%3C/script%3E"));
</script>"#;

    #[test]
    fn test_markup_with_command() {
        let key = ApiKey::parse("123-abc").unwrap();
        let markup = render_markup(&key, Some("dead;1000;v=0.3,c=logout"));
        let expected = format!(
            "<!-- Envolve Chat -->\n<script type=\"text/javascript\">\nvar envoSn=123;\nenv_commandString='dead;1000;v=0.3,c=logout';\n{}",
            LOADER_LINES
        );
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_markup_without_command() {
        let key = ApiKey::parse("123-abc").unwrap();
        let markup = render_markup(&key, None);
        let expected = format!(
            "<!-- Envolve Chat -->\n<script type=\"text/javascript\">\nvar envoSn=123;\n{}",
            LOADER_LINES
        );
        assert_eq!(markup, expected);
        assert!(!markup.contains("env_commandString"));
        assert!(!markup.ends_with('\n'));
    }
}
