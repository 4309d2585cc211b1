use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "book-digger", version, about = "Search the Google Books catalog page by page")]
pub struct Cli {
    /// 검색어 (빈 문자열도 그대로 요청한다)
    pub query: String,

    #[arg(long, default_value_t = 0, help = "Zero-based index of the first result (rounded down to a page boundary)")]
    pub start_index: u32,

    #[arg(long, help = "Override the configured request url the query is appended to")]
    pub base_url: Option<String>,

    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(long, help = "Read n (next), p (previous), s <term> (search) and q (quit) from stdin")]
    pub interactive: bool,

    #[arg(long, help = "Log level: TRACE, DEBUG, INFO, WARN or ERROR")]
    pub log_level: Option<String>,
}

/// 대화형 모드에서 입력 한 줄을 해석한 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Search(String),
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        match line {
            "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "q" | "quit" => Command::Quit,
            _ => match line.strip_prefix("s ") {
                Some(term) => Command::Search(term.to_owned()),
                None if line == "s" => Command::Search(String::new()),
                None => Command::Unknown(line.to_owned()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_commands_are_parsed() {
        assert_eq!(Command::parse("n\n"), Command::Next);
        assert_eq!(Command::parse(" previous "), Command::Previous);
        assert_eq!(Command::parse("s rust books"), Command::Search("rust books".to_owned()));
        assert_eq!(Command::parse("s"), Command::Search(String::new()));
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("x"), Command::Unknown("x".to_owned()));
    }

    #[test]
    fn cli_accepts_flags() {
        let cli = Cli::parse_from(["book-digger", "dogs", "--start-index", "20", "--json"]);

        assert_eq!(cli.query, "dogs");
        assert_eq!(cli.start_index, 20);
        assert!(cli.json);
        assert!(!cli.interactive);
    }
}
