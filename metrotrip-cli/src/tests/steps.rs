//! Behaviour-driven step definitions driving the CLI command scenarios.

use super::helpers::{
    LayerOverrides, Workspace, merge_layers, parse_stdout, result_names, run_cli,
};
use super::*;
use crate::output::write_json;
use crate::recommend::execute_recommend;
use camino::Utf8PathBuf;
use metrotrip_core::QueryError;
use metrotrip_data::{DatasetError, load_dataset};
use metrotrip_scorer::RecommendError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

#[derive(Debug)]
struct CliWorld {
    workspace: Workspace,
    dataset: RefCell<Option<Utf8PathBuf>>,
    curated_output: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
    config_layer: RefCell<Option<LayerOverrides>>,
    env_layer: RefCell<Option<LayerOverrides>>,
}

impl CliWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let curated_output = workspace.path("out/curated.json");
        Self {
            workspace,
            dataset: RefCell::new(None),
            curated_output,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
            config_layer: RefCell::new(None),
            env_layer: RefCell::new(None),
        }
    }

    fn curated_dataset(&self) -> Utf8PathBuf {
        self.dataset
            .borrow()
            .clone()
            .expect("a dataset should be written first")
    }

    fn update_layer(
        layer: &RefCell<Option<LayerOverrides>>,
        apply: impl FnOnce(&mut LayerOverrides),
    ) {
        let mut guard = layer.borrow_mut();
        apply(guard.get_or_insert_with(LayerOverrides::default));
    }

    fn dataset_args(&self) -> Vec<String> {
        self.dataset
            .borrow()
            .as_ref()
            .map(|path| vec![format!("--{ARG_DATASET}"), path.to_string()])
            .unwrap_or_default()
    }

    fn run(&self, argv: Vec<String>) {
        let mut stdout = self.stdout.borrow_mut();
        let outcome = run_cli(argv, &mut stdout);
        self.result.replace(Some(outcome));
    }

    fn output(&self) -> Value {
        parse_stdout(&self.stdout.borrow())
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn recommend(&self, count: i64, area: &str, diversify: bool) {
        let mut argv = vec![
            "metrotrip".to_owned(),
            "recommend".to_owned(),
            format!("--{ARG_AREA}"),
            area.to_owned(),
            format!("--{ARG_TOP}"),
            count.to_string(),
        ];
        argv.extend(self.dataset_args());
        if diversify {
            argv.push(format!("--{ARG_DIVERSIFY}"));
        }
        self.run(argv);
    }

    /// Parse `recommend` flags with clap, then merge them over the configured
    /// file and environment layers instead of reading the real ones.
    fn recommend_layered(&self, count: i64, area: Option<String>) {
        let mut argv = vec![
            "metrotrip".to_owned(),
            "recommend".to_owned(),
            format!("--{ARG_TOP}"),
            count.to_string(),
        ];
        if let Some(value) = area {
            argv.extend([format!("--{ARG_AREA}"), value]);
        }
        let file_layer = self.config_layer.borrow().clone();
        let env_layer = self.env_layer.borrow().clone();
        let mut stdout = self.stdout.borrow_mut();
        let outcome = Cli::try_parse_from(argv)
            .map_err(CliError::ArgumentParsing)
            .and_then(|cli| match cli.command {
                Command::Recommend(args) => merge_layers(
                    &LayerOverrides::from_args(&args),
                    file_layer.as_ref(),
                    env_layer.as_ref(),
                ),
                other => panic!("expected the recommend command, found {other:?}"),
            })
            .and_then(|config| execute_recommend(&config))
            .and_then(|results| write_json(&mut *stdout, &results));
        self.result.replace(Some(outcome));
    }
}

#[fixture]
fn world() -> CliWorld {
    CliWorld::new()
}

#[given("a curated dataset exists on disk")]
fn curated_dataset_exists(#[from(world)] world: &CliWorld) {
    world.dataset.replace(Some(world.workspace.write_curated()));
}

#[given("a raw dataset with a duplicated attraction exists on disk")]
fn raw_dataset_exists(#[from(world)] world: &CliWorld) {
    world.dataset.replace(Some(world.workspace.write_raw()));
}

#[given("the environment supplies the dataset path")]
fn environment_supplies_dataset(#[from(world)] world: &CliWorld) {
    let dataset = world.curated_dataset();
    CliWorld::update_layer(&world.env_layer, |layer| layer.dataset = Some(dataset));
}

#[given("the configuration file supplies the dataset path")]
fn config_supplies_dataset(#[from(world)] world: &CliWorld) {
    let dataset = world.curated_dataset();
    CliWorld::update_layer(&world.config_layer, |layer| layer.dataset = Some(dataset));
}

#[given("the configuration file names a dataset that does not exist")]
fn config_names_absent_dataset(#[from(world)] world: &CliWorld) {
    let absent = world.workspace.path("absent.json");
    CliWorld::update_layer(&world.config_layer, |layer| layer.dataset = Some(absent));
}

#[given("the configuration file sets the area to {area}")]
fn config_sets_area(#[from(world)] world: &CliWorld, area: String) {
    CliWorld::update_layer(&world.config_layer, |layer| layer.area = Some(area));
}

#[when("I run a layered recommend for {count} places")]
fn recommend_layered_without_area(#[from(world)] world: &CliWorld, count: i64) {
    world.recommend_layered(count, None);
}

#[when("I run a layered recommend for {count} places in {area}")]
fn recommend_layered_in_area(#[from(world)] world: &CliWorld, count: i64, area: String) {
    world.recommend_layered(count, Some(area));
}

#[when("I recommend {count} places in {area}")]
fn recommend_places(#[from(world)] world: &CliWorld, count: i64, area: String) {
    world.recommend(count, &area, false);
}

#[when("I request {count} diversified places in {area}")]
fn recommend_diversified_places(#[from(world)] world: &CliWorld, count: i64, area: String) {
    world.recommend(count, &area, true);
}

#[when("I ask {message}")]
fn ask(#[from(world)] world: &CliWorld, message: String) {
    let mut argv = vec!["metrotrip".to_owned(), "ask".to_owned(), message];
    argv.extend(world.dataset_args());
    world.run(argv);
}

#[when("I list the facets of {area}")]
fn list_facets(#[from(world)] world: &CliWorld, area: String) {
    let mut argv = vec![
        "metrotrip".to_owned(),
        "facets".to_owned(),
        format!("--{ARG_AREA}"),
        area,
    ];
    argv.extend(world.dataset_args());
    world.run(argv);
}

fn refine_argv(world: &CliWorld) -> Vec<String> {
    let input = world
        .dataset
        .borrow()
        .clone()
        .unwrap_or_else(|| world.workspace.path("absent.jsonl"));
    vec!["metrotrip".to_owned(), "refine".to_owned(), input.to_string()]
}

#[when("I refine the raw dataset into a curated file")]
fn refine_into_file(#[from(world)] world: &CliWorld) {
    let mut argv = refine_argv(world);
    argv.extend([format!("--{ARG_OUTPUT}"), world.curated_output.to_string()]);
    world.run(argv);
}

#[when("I refine the raw dataset without an output path")]
fn refine_without_output(#[from(world)] world: &CliWorld) {
    world.run(refine_argv(world));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CliWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("the recommended places are {names}")]
fn recommended_places(#[from(world)] world: &CliWorld, names: String) {
    let expected: Vec<_> = names.split(", ").map(str::to_owned).collect();
    assert_eq!(result_names(&world.output()), expected);
}

#[then("the intent targets {area}")]
fn intent_targets(#[from(world)] world: &CliWorld, area: String) {
    let output = world.output();
    let actual = output
        .get("intent")
        .and_then(|intent| intent.get("area"))
        .and_then(Value::as_str);
    assert_eq!(actual, Some(area.as_str()));
}

#[then("the listed sub-regions are {names}")]
fn listed_sub_regions(#[from(world)] world: &CliWorld, names: String) {
    let output = world.output();
    let actual: Vec<_> = output
        .get("subRegions")
        .and_then(Value::as_array)
        .expect("subRegions list")
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();
    let expected: Vec<_> = names.split(", ").map(str::to_owned).collect();
    assert_eq!(actual, expected);
}

#[then("the report counts {input} input records and {kept} kept records")]
fn report_counts(#[from(world)] world: &CliWorld, input: u64, kept: u64) {
    let output = world.output();
    assert_eq!(output.get("input").and_then(Value::as_u64), Some(input));
    assert_eq!(output.get("afterDedup").and_then(Value::as_u64), Some(kept));
}

#[then("the curated file holds {count} records")]
fn curated_file_holds(#[from(world)] world: &CliWorld, count: usize) {
    let dataset = load_dataset(&world.curated_output).expect("curated file loads");
    assert_eq!(dataset.len(), count);
}

#[then("the command fails because the result count is invalid")]
fn fails_invalid_count(#[from(world)] world: &CliWorld) {
    let error = world.error();
    assert!(
        matches!(
            &*error,
            CliError::Recommend(RecommendError::Query(QueryError::InvalidTopN { .. }))
        ),
        "expected InvalidTopN, found {error:?}"
    );
}

#[then("the command fails because the dataset option is missing")]
fn fails_missing_dataset(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_DATASET),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the output option is missing")]
fn fails_missing_output(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_OUTPUT),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the raw dataset is not found")]
fn fails_raw_not_found(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::LoadDataset(source) => {
            assert!(matches!(**source, DatasetError::NotFound { .. }), "found {source:?}");
        }
        other => panic!("expected LoadDataset, found {other:?}"),
    }
}

macro_rules! register_query_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/query_commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

macro_rules! register_layer_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/config_layers.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

macro_rules! register_refine_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/refine_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_query_scenario!(recommend_top_places, "recommending the best ranked places in an area");
register_query_scenario!(recommend_diversified, "spreading recommendations across sub-regions");
register_query_scenario!(recommend_zero_count, "rejecting a non-positive result count");
register_query_scenario!(recommend_missing_dataset, "rejecting a missing dataset option");
register_query_scenario!(ask_free_text, "answering a free-text request");
register_query_scenario!(facets_for_area, "listing the sub-regions of one area");

register_refine_scenario!(
    refine_writes_curated_file,
    "refining removes duplicates and writes the curated file"
);
register_refine_scenario!(refine_missing_output, "rejecting a missing output option");
register_refine_scenario!(refine_missing_input, "reporting a missing raw dataset");

register_layer_scenario!(
    dataset_from_environment,
    "reading the dataset path from the environment"
);
register_layer_scenario!(
    config_file_fills_omitted_flags,
    "filling omitted flags from the configuration file"
);
register_layer_scenario!(
    cli_flag_overrides_config_file,
    "overriding a configuration file value with a CLI flag"
);
register_layer_scenario!(
    environment_overrides_config_file,
    "overriding a configuration file value with the environment"
);
