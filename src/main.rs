use std::process;

use aiex::cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use aiex::domain::{AiexCommand, ALL_PERSONAS, DEFAULT_PERSONA};
use aiex::error::Error;
use aiex::ports::inbound::RunApp;
use aiex::ports::outbound::{now_iso8601, LogLevel, LogRecord};
use aiex::usecase::ask::{answer, failure_message};
use aiex::wiring::{wire, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let result = match cmd {
            AiexCommand::Help => {
                print_help();
                Ok(0)
            }
            AiexCommand::ListPersonas => {
                for p in ALL_PERSONAS {
                    let mark = if p == DEFAULT_PERSONA { " (default)" } else { "" };
                    println!("{}{}  {} - {}", p.as_str(), mark, p.label(), p.description());
                }
                Ok(0)
            }
            AiexCommand::Ask { expert, question } => {
                answer(expert.as_deref(), &question).map(|text| {
                    println!("{}", text);
                    0
                })
            }
        };

        let code = match &result {
            Ok(c) => *c,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &AiexCommand) -> &'static str {
    match cmd {
        AiexCommand::Help => "help",
        AiexCommand::ListPersonas => "list-personas",
        AiexCommand::Ask { .. } => "ask",
    }
}

fn main() {
    // カレントディレクトリの .env を読み込む（無ければ何もしない）
    let _ = dotenvy::dotenv();
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
                eprintln!("aiex: {}", e);
            } else {
                eprintln!("{}", failure_message(&e));
            }
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    let app = wire();
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: aiex [options] [question...]");
}

fn print_help() {
    println!("Usage: aiex [options] [question...]");
    println!("Options:");
    println!("  -h, --help              Show this help message");
    println!("  -L, --list-personas     List available expert personas");
    println!("  -e, --expert <persona>  Select the expert persona (medical, programming, business, education). Default: programming");
    println!("  --generate <shell>      Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY  API key for the chat completions endpoint (required).");
    println!("                 Also loaded from .env in the current directory when present.");
    println!("  AIEX_HOME       Home directory for logs ($AIEX_HOME/log/aiex.jsonl).");
    println!("                 If unset, $XDG_CONFIG_HOME/aiex (e.g. ~/.config/aiex) is used.");
    println!();
    println!("Description:");
    println!("  Chat with an AI that answers as one of four expert personas.");
    println!("  The selected persona's instruction is prepended to your question and the");
    println!("  answer is generated with a fixed model (gpt-4o-mini, temperature 0.5).");
    println!();
    println!("Examples:");
    println!("  aiex Pythonでリストを逆順にする方法は？");
    println!("  aiex -e medical 睡眠の質を上げるには？");
    println!("  aiex --expert business 新規事業の立ち上げで最初にやるべきことは？");
    println!("  aiex -L");
}
