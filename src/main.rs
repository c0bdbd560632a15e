//! Главный исполняемый файл RustLex

use clap::{Parser, Subcommand};
use rustlex::lexer::{dialect_names, get_dialect, Scanner, SQL_DIALECT};
use rustlex::VERSION;

#[derive(Parser)]
#[command(name = "rustlex")]
#[command(about = "Лексический анализатор SQL с поддержкой диалектов")]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Имя диалекта из реестра
    #[arg(short, long, default_value = SQL_DIALECT)]
    dialect: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Сканирует SQL оператор и печатает токены
    Tokens {
        /// SQL текст для сканирования
        sql: String,
        /// Печатать токены в формате JSON
        #[arg(long)]
        json: bool,
    },
    /// Печатает грамматику операторов диалекта
    Grammar,
    /// Показывает зарегистрированные диалекты
    Dialects,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Tokens { sql, json }) => {
            let dialect = get_dialect(&cli.dialect)?;
            let mut scanner = Scanner::new(sql, &dialect)?;
            let tokens = scanner.tokenize()?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in &tokens {
                    println!(
                        "{:<20} {:<24} {}",
                        format!("{:?}", token.token_type),
                        token.value,
                        token.position
                    );
                }
            }
        }
        Some(Commands::Grammar) => {
            let dialect = get_dialect(&cli.dialect)?;
            println!("Грамматика диалекта '{}':", dialect.name);
            for statement in &dialect.statements {
                println!("  {}", statement);
            }
        }
        Some(Commands::Dialects) => {
            println!("Зарегистрированные диалекты:");
            for name in dialect_names()? {
                println!("  {}", name);
            }
        }
        None => {
            println!("Добро пожаловать в RustLex v{}!", VERSION);
            println!("Используйте --help для получения справки");
        }
    }

    Ok(())
}
