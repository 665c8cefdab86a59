//! Minimal `.env` loading (KEY=VALUE lines) for the API credential.

use std::path::PathBuf;

/// Parse `.env` content. Blank lines and `#` comments are skipped; values
/// lose surrounding quotes.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.to_string(), value.to_string())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Load the first `.env` found (working directory, then the config dir).
/// Variables already set in the environment win.
pub fn load() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(dir) = flutterbot_config::toml_loader::app_dir() {
        candidates.push(dir.join(".env"));
    }

    for path in candidates {
        if let Ok(contents) = std::fs::read_to_string(&path) {
            for (key, value) in parse(&contents) {
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(&key, value);
                }
            }
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_skips_comments() {
        let pairs = parse(
            "# credentials\nGROQ_API_KEY=gsk_abc\n\n  OTHER = 'quoted value'  \nexport EXTRA=\"x\"\n",
        );
        assert_eq!(
            pairs,
            vec![
                ("GROQ_API_KEY".to_string(), "gsk_abc".to_string()),
                ("OTHER".to_string(), "quoted value".to_string()),
                ("EXTRA".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn ignores_lines_without_equals() {
        assert!(parse("just some text\n=novalue\n").is_empty());
    }

    #[test]
    fn keeps_equals_inside_value() {
        let pairs = parse("TOKEN=a=b=c");
        assert_eq!(pairs, vec![("TOKEN".to_string(), "a=b=c".to_string())]);
    }
}
