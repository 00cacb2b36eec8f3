//! 子命令执行。

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context as _, bail};
use pdarena_api_types::{
    ApiResult, SubmissionNewProps, TournamentDataNewProps, TournamentNewProps,
    TournamentSubmissionNewProps,
};
use pdarena_client::ArenaClient;
use pdarena_core::{ApiKey, FileCredentialStore, persist_api_key, restore_api_key};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{
    AuthCommand, Command, MatchResolutionCommand, SubmissionCommand, TournamentCommand,
    TournamentDataCommand, TournamentSubmissionCommand,
};

/// 一次命令执行所需的上下文。
pub struct Context {
    pub client: ArenaClient,
    /// 单次调用覆盖的基础地址，`None` 时使用进程级默认地址。
    pub server: Option<String>,
    pub api_key: Option<String>,
    pub credential_path: Option<PathBuf>,
}

impl Context {
    fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    fn credential_store(&self) -> anyhow::Result<FileCredentialStore> {
        let path = self
            .credential_path
            .clone()
            .context("no credential file location; set `credential_file` in the config")?;
        Ok(FileCredentialStore::new(path))
    }

    /// 优先使用命令行给出的 key，否则读取已保存的凭据。
    fn api_key(&self) -> anyhow::Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }

        let mut store = self.credential_store()?;
        let Some(api_key) = restore_api_key(&mut store) else {
            bail!("no API key; pass --api-key or run `pdarena auth set <file>`");
        };

        if api_key.is_expired_at(now_millis()) {
            warn!(
                api_key_id = api_key.api_key_id,
                "stored API key has expired, the server will likely reject it"
            );
        }

        Ok(api_key.key)
    }
}

pub async fn run(command: Command, ctx: &Context) -> anyhow::Result<ExitCode> {
    match command {
        Command::Auth(command) => run_auth(command, ctx),
        Command::Submission(command) => run_submission(command, ctx).await,
        Command::Tournament(command) => run_tournament(command, ctx).await,
        Command::TournamentData(command) => run_tournament_data(command, ctx).await,
        Command::TournamentSubmission(command) => run_tournament_submission(command, ctx).await,
        Command::MatchResolution(command) => run_match_resolution(command, ctx).await,
    }
}

fn run_auth(command: AuthCommand, ctx: &Context) -> anyhow::Result<ExitCode> {
    let mut store = ctx.credential_store()?;

    match command {
        AuthCommand::Set { file } => {
            let raw = read_input(&file)?;
            let api_key: ApiKey =
                serde_json::from_str(&raw).context("input is not a valid API key record")?;
            persist_api_key(&mut store, Some(&api_key))
                .context("failed to save API key")?;
            info!(
                path = %store.path().display(),
                creator_user_id = %api_key.creator_user_id,
                "API key stored"
            );
        }
        AuthCommand::Show => match restore_api_key(&mut store) {
            Some(api_key) => print_json(&api_key)?,
            None => println!("no stored API key"),
        },
        AuthCommand::Clear => {
            persist_api_key(&mut store, None).context("failed to clear API key")?;
            info!(path = %store.path().display(), "API key cleared");
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_submission(command: SubmissionCommand, ctx: &Context) -> anyhow::Result<ExitCode> {
    let api_key = ctx.api_key()?;

    match command {
        SubmissionCommand::New { file } => {
            let code = read_input(&file)?;
            let props = SubmissionNewProps { code, api_key };
            report(ctx.client.submission_new(&props, ctx.server()).await)
        }
        SubmissionCommand::View(args) => {
            let props = args.into_props(api_key);
            report(ctx.client.submission_view(&props, ctx.server()).await)
        }
    }
}

async fn run_tournament(command: TournamentCommand, ctx: &Context) -> anyhow::Result<ExitCode> {
    let api_key = ctx.api_key()?;

    match command {
        TournamentCommand::New { title, description } => {
            let props = TournamentNewProps {
                title,
                description,
                api_key,
            };
            report(ctx.client.tournament_new(&props, ctx.server()).await)
        }
    }
}

async fn run_tournament_data(
    command: TournamentDataCommand,
    ctx: &Context,
) -> anyhow::Result<ExitCode> {
    let api_key = ctx.api_key()?;

    match command {
        TournamentDataCommand::New {
            tournament,
            title,
            description,
            inactive,
        } => {
            let props = TournamentDataNewProps {
                tournament_id: tournament,
                title,
                description,
                active: !inactive,
                api_key,
            };
            report(ctx.client.tournament_data_new(&props, ctx.server()).await)
        }
        TournamentDataCommand::View(args) => {
            let props = args.into_props(api_key);
            report(ctx.client.tournament_data_view(&props, ctx.server()).await)
        }
    }
}

async fn run_tournament_submission(
    command: TournamentSubmissionCommand,
    ctx: &Context,
) -> anyhow::Result<ExitCode> {
    let api_key = ctx.api_key()?;

    match command {
        TournamentSubmissionCommand::New {
            tournament,
            submission,
            kind,
            inactive,
        } => {
            let props = TournamentSubmissionNewProps {
                tournament_id: tournament,
                submission_id: submission,
                active: !inactive,
                kind: kind.into(),
                api_key,
            };
            report(
                ctx.client
                    .tournament_submission_new(&props, ctx.server())
                    .await,
            )
        }
        TournamentSubmissionCommand::View(args) => {
            let props = args.into_props(api_key);
            report(
                ctx.client
                    .tournament_submission_view(&props, ctx.server())
                    .await,
            )
        }
    }
}

async fn run_match_resolution(
    command: MatchResolutionCommand,
    ctx: &Context,
) -> anyhow::Result<ExitCode> {
    let api_key = ctx.api_key()?;

    match command {
        MatchResolutionCommand::View(args) => {
            let props = args.into_props(api_key);
            report(ctx.client.match_resolution_view(&props, ctx.server()).await)
        }
    }
}

/// 成功时输出 JSON，失败时把错误码写到标准错误并以非零状态退出。
fn report<T: Serialize>(result: ApiResult<T>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(payload) => {
            print_json(&payload)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(code) => {
            eprintln!("error: {code}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render response")?;
    println!("{rendered}");
    Ok(())
}

/// 读取文件内容，`-` 表示标准输入。
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read standard input")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}
