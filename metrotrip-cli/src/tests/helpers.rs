//! Test helpers for preparing datasets on disk and invoking commands.

use super::*;
use crate::recommend::{RecommendConfig, config_from_layers_for_test};
use camino::{Utf8Path, Utf8PathBuf};
use metrotrip_core::test_support::sample_dataset;
use metrotrip_data::write_dataset;
use ortho_config::MergeComposer;
use serde_json::{Map, Value};
use tempfile::TempDir;

/// `recommend` options supplied by one configuration layer.
#[derive(Debug, Clone, Default)]
pub(super) struct LayerOverrides {
    pub(super) dataset: Option<Utf8PathBuf>,
    pub(super) area: Option<String>,
    pub(super) top: Option<i64>,
}

impl LayerOverrides {
    pub(super) fn from_args(args: &RecommendArgs) -> Self {
        Self {
            dataset: args.dataset.clone(),
            area: args.area.clone(),
            top: args.top,
        }
    }

    /// The layer as the JSON object `ortho_config` merges, without unset keys.
    fn to_value(&self) -> Value {
        let mut object = Map::new();
        if let Some(dataset) = &self.dataset {
            object.insert("dataset".to_owned(), Value::from(dataset.as_str()));
        }
        if let Some(area) = &self.area {
            object.insert("area".to_owned(), Value::from(area.as_str()));
        }
        if let Some(top) = self.top {
            object.insert("top".to_owned(), Value::from(top));
        }
        Value::Object(object)
    }
}

/// Merge file, environment and CLI layers in precedence order and resolve the
/// `recommend` configuration.
pub(super) fn merge_layers(
    cli_layer: &LayerOverrides,
    file_layer: Option<&LayerOverrides>,
    env_layer: Option<&LayerOverrides>,
) -> Result<RecommendConfig, CliError> {
    let mut composer = MergeComposer::new();
    if let Some(layer) = file_layer {
        composer.push_file(layer.to_value(), None);
    }
    if let Some(layer) = env_layer {
        composer.push_environment(layer.to_value());
    }
    composer.push_cli(cli_layer.to_value());
    config_from_layers_for_test(composer.layers())
}

/// Raw JSON Lines rows: 경복궁 twice (ranks 2 and 1) and 창덕궁 once.
pub(super) const RAW_ROWS: &str = concat!(
    "{\"areaNm\": \"서울특별시\", \"signguNm\": \"종로구\", \"rlteTatsNm\": \" 경복궁 \", \"rlteRank\": \"2\"}\n",
    "{\"areaNm\": \"서울특별시\", \"signguNm\": \"종로구\", \"rlteTatsNm\": \"경복궁\", \"rlteRank\": 1}\n",
    "{\"areaNm\": \"서울특별시\", \"signguNm\": \"종로구\", \"rlteTatsNm\": \"창덕궁\", \"rlteRank\": \"3\"}\n",
);

#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Persist the shared sample dataset and return its path.
    pub(super) fn write_curated(&self) -> Utf8PathBuf {
        let path = self.path("curated.json");
        write_dataset(&path, &sample_dataset()).expect("write curated dataset");
        path
    }

    pub(super) fn write_raw(&self) -> Utf8PathBuf {
        let path = self.path("raw.jsonl");
        write_utf8(&path, RAW_ROWS.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

/// Parse `argv` as the binary would and run the command into `stdout`.
pub(super) fn run_cli<I, T>(argv: I, stdout: &mut Vec<u8>) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv)?;
    run_command(cli.command, stdout)
}

pub(super) fn parse_stdout(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout should be JSON")
}

/// Related names of the result rows, whether `value` is a bare result array
/// or an `ask` response.
pub(super) fn result_names(value: &Value) -> Vec<String> {
    let rows = value
        .get("results")
        .unwrap_or(value)
        .as_array()
        .expect("result rows");
    rows.iter()
        .map(|row| {
            row.get("relatedName")
                .and_then(Value::as_str)
                .expect("relatedName column")
                .to_owned()
        })
        .collect()
}
