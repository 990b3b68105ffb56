use crate::domain::{AiexCommand, Question};
use crate::error::Error;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -L / --list-personas: 利用可能なペルソナ一覧を表示
    pub list_personas: bool,
    /// -e / --expert: ペルソナ名（識別子または日本語ラベル）。None はデフォルト
    pub expert: Option<String>,
    pub question_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            list_personas: false,
            expert: None,
            question_args: Vec::new(),
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("aiex")
        .about("Ask a question to an AI expert persona")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-personas")
                .short('L')
                .long("list-personas")
                .help("List available expert personas")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("expert")
                .short('e')
                .long("expert")
                .value_name("persona")
                .help("Select the expert persona (medical, programming, business, education)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Question words to send")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let list_personas = matches.get_flag("list-personas");
    let expert = matches.get_one::<String>("expert").cloned();
    let question_args: Vec<String> = matches
        .get_many::<String>("positional")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();

    Config {
        help,
        list_personas,
        expert,
        question_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let opts = "-h --help -L --list-personas -e --expert --generate";
    let personas = "medical programming business education";
    match shell {
        Shell::Bash => {
            println!(
                r#"# Completion for aiex (options + persona names)
_aiex() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  local prev="${{COMP_WORDS[COMP_CWORD-1]}}"
  if [ "$prev" = "-e" ] || [ "$prev" = "--expert" ]; then
    COMPREPLY=($(compgen -W "{personas}" -- "$cur"))
    return
  fi
  COMPREPLY=($(compgen -W "{opts}" -- "$cur"))
}}
complete -F _aiex aiex
"#,
                personas = personas,
                opts = opts
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Completion for aiex (options + persona names)
#compdef aiex
local -a reply
reply=({personas} {opts})
_describe 'aiex' reply
"#,
                personas = personas,
                opts = opts
            );
        }
        Shell::Fish => {
            println!(
                r#"# Completion for aiex (options + persona names)
complete -c aiex -l help -s h -d "Show help"
complete -c aiex -l list-personas -s L -d "List personas"
complete -c aiex -l expert -s e -d "Expert persona" -r -a "medical programming business education"
complete -c aiex -l generate -d "Generate completion script" -r -a "bash zsh fish"
"#
            );
        }
        _ => {}
    }
}

/// Config を AiexCommand に変換する
pub fn config_to_command(config: Config) -> AiexCommand {
    if config.help {
        return AiexCommand::Help;
    }

    if config.list_personas {
        return AiexCommand::ListPersonas;
    }

    let question = Question::new(config.question_args.join(" "));
    AiexCommand::Ask {
        expert: config.expert,
        question,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.list_personas);
        assert!(config.expert.is_none());
        assert_eq!(config.question_args.len(), 0);
    }

    #[test]
    fn test_parse_args_no_args() {
        let args = vec!["aiex".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(!config.help);
        assert_eq!(config.question_args.len(), 0);
    }

    #[test]
    fn test_parse_args_help_short() {
        let args = vec!["aiex".to_string(), "-h".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_parse_args_help_long() {
        let args = vec!["aiex".to_string(), "--help".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let args = vec!["aiex".to_string(), "--unknown".to_string()];
        let result = parse_args_from(&args);
        assert!(result.is_err(), "unknown long option must be rejected");
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_unknown_option_short() {
        let args = vec!["aiex".to_string(), "-x".to_string()];
        let result = parse_args_from(&args);
        assert!(result.is_err(), "unknown short option -x must be rejected");
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_question_words() {
        let args = vec![
            "aiex".to_string(),
            "Pythonで".to_string(),
            "リストを".to_string(),
            "逆順にするには".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.question_args.len(), 3);
        assert_eq!(config.question_args[0], "Pythonで");
    }

    #[test]
    fn test_parse_args_expert_short() {
        let args = vec![
            "aiex".to_string(),
            "-e".to_string(),
            "medical".to_string(),
            "質問".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.expert.as_deref(), Some("medical"));
        assert_eq!(config.question_args, vec!["質問".to_string()]);
    }

    #[test]
    fn test_parse_args_expert_long() {
        let args = vec![
            "aiex".to_string(),
            "--expert".to_string(),
            "business".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.expert.as_deref(), Some("business"));
    }

    #[test]
    fn test_parse_args_expert_japanese_label() {
        let args = vec![
            "aiex".to_string(),
            "-e".to_string(),
            "教育アドバイザー".to_string(),
            "学習計画の立て方".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.expert.as_deref(), Some("教育アドバイザー"));
    }

    #[test]
    fn test_parse_args_expert_requires_arg() {
        let args = vec!["aiex".to_string(), "-e".to_string()];
        let result = parse_args_from(&args);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("argument") || err.to_string().contains("required"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_list_personas_short() {
        let args = vec!["aiex".to_string(), "-L".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(config.list_personas);
    }

    #[test]
    fn test_parse_args_list_personas_long() {
        let args = vec!["aiex".to_string(), "--list-personas".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(config.list_personas);
    }

    #[test]
    fn test_config_to_command_help() {
        let config = Config {
            help: true,
            ..Default::default()
        };
        assert_eq!(config_to_command(config), AiexCommand::Help);
    }

    #[test]
    fn test_config_to_command_list_personas() {
        let config = Config {
            list_personas: true,
            ..Default::default()
        };
        assert_eq!(config_to_command(config), AiexCommand::ListPersonas);
    }

    #[test]
    fn test_config_to_command_joins_question_words() {
        let config = Config {
            expert: Some("medical".to_string()),
            question_args: vec!["睡眠の質を".to_string(), "上げるには".to_string()],
            ..Default::default()
        };
        let cmd = config_to_command(config);
        match cmd {
            AiexCommand::Ask { expert, question } => {
                assert_eq!(expert.as_deref(), Some("medical"));
                assert_eq!(question.as_ref(), "睡眠の質を 上げるには");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_to_command_empty_args_is_blank_question() {
        let cmd = config_to_command(Config::default());
        match cmd {
            AiexCommand::Ask { expert, question } => {
                assert!(expert.is_none());
                assert!(question.is_blank());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
