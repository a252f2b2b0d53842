//! thai-ime - 로마자 전사로 태국어 단어 후보 조회

use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use thai_ime::config::{load_config, load_config_from};
use thai_ime::SearchEngine;

#[derive(Parser)]
#[command(name = "thai-ime")]
#[command(about = "Look up Thai words by romanized transcription, ranked by frequency")]
struct Cli {
    /// 설정 파일 경로 (기본: ~/.config/thai-ime/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 단어 목록 파일 (설정값 대신 사용)
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// 빈도 목록 파일 (설정값 대신 사용)
    #[arg(long)]
    frequency: Option<PathBuf>,

    /// 출력할 최대 후보 수
    #[arg(short, long)]
    limit: Option<usize>,

    /// 검색어. 없으면 표준 입력에서 한 줄씩 읽음
    queries: Vec<String>,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드 후 CLI 인자로 덮어씀
    let mut config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    if let Some(path) = cli.wordlist {
        config.wordlist_path = path;
    }
    if let Some(path) = cli.frequency {
        config.frequency_path = path;
    }
    let limit = cli.limit.unwrap_or(config.max_candidates);

    // 두 목록이 모두 로드될 때까지 대기
    let engine = thai_ime::init(&config);

    if !cli.queries.is_empty() {
        for query in &cli.queries {
            print_candidates(&engine, query, limit);
        }
        return;
    }

    println!("로마자를 입력하세요 (':q' 또는 EOF로 종료)");
    prompt();

    for line in stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        let query = line.trim();
        if query == ":q" {
            break;
        }
        print_candidates(&engine, query, limit);
        prompt();
    }
}

fn print_candidates(engine: &SearchEngine, query: &str, limit: usize) {
    let candidates = engine.search_limited(query, limit);
    if candidates.is_empty() {
        println!("{}: 후보 없음", query);
        return;
    }

    println!("{}:", query);
    for (i, word) in candidates.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, word, engine.frequency(word));
    }
}

fn prompt() {
    print!("> ");
    if let Err(e) = stdout().flush() {
        log::warn!("출력 플러시 실패: {}", e);
    }
}
