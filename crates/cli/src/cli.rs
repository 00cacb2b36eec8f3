//! 命令行参数定义。

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pdarena_api_types::{
    MatchResolutionViewProps, SubmissionViewProps, TournamentDataViewProps,
    TournamentSubmissionKind, TournamentSubmissionViewProps,
};
use pdarena_core::{
    MatchResolutionId, SubmissionId, TournamentDataId, TournamentId, TournamentSubmissionId,
    UserId,
};

#[derive(Debug, Parser)]
#[command(name = "pdarena", version, about = "Command-line client for the pdarena tournament API")]
pub struct Cli {
    /// 配置文件路径，默认为 `<config dir>/pdarena/config.toml`。
    #[arg(long, global = true, env = "PDARENA_CONFIG")]
    pub config: Option<PathBuf>,

    /// 本次调用使用的 API 基础地址，覆盖配置文件与默认地址。
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// 直接指定 API key，跳过已保存的凭据。
    #[arg(long, global = true, env = "PDARENA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 管理本地保存的凭据。
    #[command(subcommand)]
    Auth(AuthCommand),
    #[command(subcommand)]
    Submission(SubmissionCommand),
    #[command(subcommand)]
    Tournament(TournamentCommand),
    #[command(subcommand)]
    TournamentData(TournamentDataCommand),
    #[command(subcommand)]
    TournamentSubmission(TournamentSubmissionCommand),
    #[command(subcommand)]
    MatchResolution(MatchResolutionCommand),
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// 保存 API key 记录（JSON 文件，`-` 表示标准输入）。
    Set { file: PathBuf },
    Show,
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum SubmissionCommand {
    /// 上传源文件作为新的提交。
    New {
        #[arg(long)]
        file: PathBuf,
    },
    View(SubmissionViewArgs),
}

#[derive(Debug, Subcommand)]
pub enum TournamentCommand {
    New {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TournamentDataCommand {
    /// 为锦标赛追加一版元数据。
    New {
        #[arg(long)]
        tournament: TournamentId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        inactive: bool,
    },
    View(TournamentDataViewArgs),
}

#[derive(Debug, Subcommand)]
pub enum TournamentSubmissionCommand {
    New {
        #[arg(long)]
        tournament: TournamentId,
        #[arg(long)]
        submission: SubmissionId,
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long)]
        inactive: bool,
    },
    View(TournamentSubmissionViewArgs),
}

#[derive(Debug, Subcommand)]
pub enum MatchResolutionCommand {
    View(MatchResolutionViewArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Compete,
    Validate,
    Testcase,
    Cancel,
}

impl From<KindArg> for TournamentSubmissionKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Compete => Self::Compete,
            KindArg::Validate => Self::Validate,
            KindArg::Testcase => Self::Testcase,
            KindArg::Cancel => Self::Cancel,
        }
    }
}

/// 创建时间区间过滤，单位毫秒。
#[derive(Debug, Args)]
pub struct TimeRangeArgs {
    #[arg(long)]
    pub min_time: Option<i64>,
    #[arg(long)]
    pub max_time: Option<i64>,
}

#[derive(Debug, Args)]
pub struct SubmissionViewArgs {
    #[arg(long = "id")]
    pub ids: Vec<SubmissionId>,
    #[arg(long = "creator")]
    pub creators: Vec<UserId>,
    #[command(flatten)]
    pub time: TimeRangeArgs,
}

impl SubmissionViewArgs {
    pub fn into_props(self, api_key: String) -> SubmissionViewProps {
        SubmissionViewProps {
            submission_id: non_empty(self.ids),
            min_creation_time: self.time.min_time,
            max_creation_time: self.time.max_time,
            creator_user_id: non_empty(self.creators),
            api_key,
        }
    }
}

#[derive(Debug, Args)]
pub struct TournamentDataViewArgs {
    #[arg(long = "id")]
    pub ids: Vec<TournamentDataId>,
    #[arg(long = "creator")]
    pub creators: Vec<UserId>,
    #[arg(long = "tournament")]
    pub tournaments: Vec<TournamentId>,
    #[arg(long = "title")]
    pub titles: Vec<String>,
    #[arg(long)]
    pub active: Option<bool>,
    /// 返回全部历史版本，而不只是每个锦标赛的最新一版。
    #[arg(long)]
    pub all_versions: bool,
    #[command(flatten)]
    pub time: TimeRangeArgs,
}

impl TournamentDataViewArgs {
    pub fn into_props(self, api_key: String) -> TournamentDataViewProps {
        TournamentDataViewProps {
            tournament_data_id: non_empty(self.ids),
            min_creation_time: self.time.min_time,
            max_creation_time: self.time.max_time,
            creator_user_id: non_empty(self.creators),
            tournament_id: non_empty(self.tournaments),
            title: non_empty(self.titles),
            active: self.active,
            only_recent: !self.all_versions,
            api_key,
        }
    }
}

#[derive(Debug, Args)]
pub struct TournamentSubmissionViewArgs {
    #[arg(long = "id")]
    pub ids: Vec<TournamentSubmissionId>,
    #[arg(long = "creator")]
    pub creators: Vec<UserId>,
    #[arg(long = "tournament")]
    pub tournaments: Vec<TournamentId>,
    #[arg(long = "submission")]
    pub submissions: Vec<SubmissionId>,
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
    #[arg(long)]
    pub all_versions: bool,
    #[command(flatten)]
    pub time: TimeRangeArgs,
}

impl TournamentSubmissionViewArgs {
    pub fn into_props(self, api_key: String) -> TournamentSubmissionViewProps {
        TournamentSubmissionViewProps {
            tournament_submission_id: non_empty(self.ids),
            min_creation_time: self.time.min_time,
            max_creation_time: self.time.max_time,
            creator_user_id: non_empty(self.creators),
            tournament_id: non_empty(self.tournaments),
            submission_id: non_empty(self.submissions),
            kind: self.kind.map(Into::into),
            only_recent: !self.all_versions,
            api_key,
        }
    }
}

#[derive(Debug, Args)]
pub struct MatchResolutionViewArgs {
    #[arg(long = "id")]
    pub ids: Vec<MatchResolutionId>,
    #[arg(long = "creator")]
    pub creators: Vec<UserId>,
    #[arg(long = "submission")]
    pub submissions: Vec<SubmissionId>,
    #[arg(long = "opponent")]
    pub opponents: Vec<SubmissionId>,
    #[arg(long = "round")]
    pub rounds: Vec<i64>,
    #[command(flatten)]
    pub time: TimeRangeArgs,
}

impl MatchResolutionViewArgs {
    pub fn into_props(self, api_key: String) -> MatchResolutionViewProps {
        MatchResolutionViewProps {
            min_creation_time: self.time.min_time,
            max_creation_time: self.time.max_time,
            match_resolution_id: non_empty(self.ids),
            creator_user_id: non_empty(self.creators),
            submission_id: non_empty(self.submissions),
            opponent_submission_id: non_empty(self.opponents),
            round: non_empty(self.rounds),
            api_key,
        }
    }
}

/// 未给出的重复参数表示不过滤。
fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}
