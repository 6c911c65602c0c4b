use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::chart::{
    AccumulationAxis, AccumulationChart, DecumulationChart, accumulation_chart,
    decumulation_chart,
};
use crate::core::{
    AccumulationInputs, BalanceTable, BalanceUnit, DEFAULT_WITHDRAWAL_STDEV, DecumulationInputs,
    Layout, RuinPolicy, seeded_rng, serialize_cells, simulate_accumulation, simulate_decumulation,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

const MAX_YEARS: u32 = 100;
/// Bound on `years * simulations`; every simulated matrix scales with it.
const MAX_SIMULATION_YEARS: u64 = 1_000_000;
const MAX_RETIRE_AGE: u32 = 150;
const CALENDAR_YEARS: std::ops::RangeInclusive<i32> = 1900..=2200;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliLayout {
    Rows,
    Columns,
}

impl From<CliLayout> for Layout {
    fn from(value: CliLayout) -> Self {
        match value {
            CliLayout::Rows => Layout::RowMajor,
            CliLayout::Columns => Layout::ColumnMajor,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRuinPolicy {
    Terminal,
    Snapshot,
}

impl From<CliRuinPolicy> for RuinPolicy {
    fn from(value: CliRuinPolicy) -> Self {
        match value {
            CliRuinPolicy::Terminal => RuinPolicy::Terminal,
            CliRuinPolicy::Snapshot => RuinPolicy::Snapshot,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliOutput {
    Json,
    Summary,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ApiLayout {
    #[serde(alias = "row-major", alias = "rowMajor")]
    Rows,
    #[serde(alias = "column-major", alias = "columnMajor")]
    Columns,
}

impl From<ApiLayout> for CliLayout {
    fn from(value: ApiLayout) -> Self {
        match value {
            ApiLayout::Rows => CliLayout::Rows,
            ApiLayout::Columns => CliLayout::Columns,
        }
    }
}

impl From<CliLayout> for ApiLayout {
    fn from(value: CliLayout) -> Self {
        match value {
            CliLayout::Rows => ApiLayout::Rows,
            CliLayout::Columns => ApiLayout::Columns,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiRuinPolicy {
    #[serde(alias = "sticky")]
    Terminal,
    Snapshot,
}

impl From<ApiRuinPolicy> for CliRuinPolicy {
    fn from(value: ApiRuinPolicy) -> Self {
        match value {
            ApiRuinPolicy::Terminal => CliRuinPolicy::Terminal,
            ApiRuinPolicy::Snapshot => CliRuinPolicy::Snapshot,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Monte Carlo projections of savings growth and retirement drawdown"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web page and JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Simulate saving with monthly contributions that grow with pay raises
    Accumulate(AccumulateArgs),
    /// Simulate monthly withdrawals under inflation
    Decumulate(DecumulateArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    #[arg(long, default_value_t = 30, help = "Years to simulate")]
    years: u32,
    #[arg(long, default_value_t = 100)]
    simulations: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, help = "Seed from OS entropy instead of --seed")]
    entropy: bool,
    #[arg(long, value_enum, default_value_t = CliLayout::Columns)]
    layout: CliLayout,
    #[arg(long, value_enum, default_value_t = CliOutput::Json)]
    output: CliOutput,
}

#[derive(Args, Debug, Clone)]
struct AccumulateArgs {
    #[arg(long, default_value_t = 10_000.0)]
    start_capital: f64,
    #[arg(
        long,
        default_value_t = 7.0,
        help = "Expected annual return in percent, e.g. 7 (values of 1 or less are fractions, 0.07)"
    )]
    return_mean: f64,
    #[arg(
        long,
        default_value_t = 15.0,
        help = "Annual return volatility in percent; values of 1 or less are fractions"
    )]
    return_volatility: f64,
    #[arg(
        long,
        default_value_t = 3.0,
        help = "Expected annual pay raise in percent, grows contributions; values of 1 or less are fractions"
    )]
    raise_mean: f64,
    #[arg(
        long,
        default_value_t = 1.0,
        help = "Annual pay raise volatility in percent; values of 1 or less are fractions"
    )]
    raise_volatility: f64,
    #[arg(long, default_value_t = 500.0)]
    monthly_contribution: f64,
    #[arg(long, help = "First calendar year on the chart; defaults to this year")]
    start_year: Option<i32>,
    #[arg(long, help = "Birth year, adds ages to the chart labels")]
    birth_year: Option<i32>,
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args, Debug, Clone)]
struct DecumulateArgs {
    #[arg(long, default_value_t = 1_000_000.0)]
    start_capital: f64,
    #[arg(
        long,
        default_value_t = 6.0,
        help = "Expected annual return in percent, e.g. 6 (values of 1 or less are fractions, 0.06)"
    )]
    return_mean: f64,
    #[arg(
        long,
        default_value_t = 12.0,
        help = "Annual return volatility in percent; values of 1 or less are fractions"
    )]
    return_volatility: f64,
    #[arg(
        long,
        default_value_t = 2.5,
        help = "Expected annual inflation in percent; values of 1 or less are fractions"
    )]
    inflation_mean: f64,
    #[arg(
        long,
        default_value_t = 1.0,
        help = "Inflation volatility in percent; values of 1 or less are fractions"
    )]
    inflation_volatility: f64,
    #[arg(long, default_value_t = 4_000.0)]
    monthly_withdrawal: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_WITHDRAWAL_STDEV,
        help = "Standard deviation of each monthly withdrawal, in currency units"
    )]
    withdrawal_noise: f64,
    #[arg(long, default_value_t = 65, help = "Age at the start of the drawdown")]
    retire_age: u32,
    #[arg(
        long,
        default_value_t = 90.0,
        help = "Share of scenarios that must still pay out, in percent"
    )]
    success_threshold: f64,
    #[arg(long, value_enum, default_value_t = CliRuinPolicy::Terminal)]
    ruin: CliRuinPolicy,
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AccumulatePayload {
    start_capital: Option<f64>,
    return_mean: Option<f64>,
    return_vol: Option<f64>,
    raise_mean: Option<f64>,
    raise_vol: Option<f64>,
    monthly_contribution: Option<f64>,
    start_year: Option<i32>,
    birth_year: Option<i32>,
    years: Option<u32>,
    simulations: Option<u32>,
    seed: Option<u64>,
    entropy: Option<bool>,
    layout: Option<ApiLayout>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DecumulatePayload {
    start_capital: Option<f64>,
    return_mean: Option<f64>,
    return_vol: Option<f64>,
    inflation_mean: Option<f64>,
    inflation_vol: Option<f64>,
    monthly_withdrawal: Option<f64>,
    withdrawal_noise: Option<f64>,
    retire_age: Option<u32>,
    success_threshold: Option<f64>,
    ruin: Option<ApiRuinPolicy>,
    years: Option<u32>,
    simulations: Option<u32>,
    seed: Option<u64>,
    entropy: Option<bool>,
    layout: Option<ApiLayout>,
}

#[derive(Debug, Clone, Copy)]
struct RunOptions {
    seed: Option<u64>,
    layout: CliLayout,
}

#[derive(Debug)]
struct AccumulationRequest {
    inputs: AccumulationInputs,
    axis: AccumulationAxis,
    options: RunOptions,
}

#[derive(Debug)]
struct DecumulationRequest {
    inputs: DecumulationInputs,
    retire_age: u32,
    success_threshold: f64,
    options: RunOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TableResponse {
    unit: BalanceUnit,
    layout: ApiLayout,
    months: usize,
    simulations: usize,
    #[serde(serialize_with = "serialize_cells")]
    balances: Vec<Vec<f64>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccumulationResponse {
    seed: Option<u64>,
    chart: AccumulationChart,
    table: TableResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecumulationResponse {
    seed: Option<u64>,
    ruin: RuinPolicy,
    chart: DecumulationChart,
    table: TableResponse,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn build_run_options(run: &RunArgs) -> Result<RunOptions, String> {
    if run.years == 0 {
        return Err("--years must be > 0".to_string());
    }
    if run.years > MAX_YEARS {
        return Err(format!("--years must be <= {MAX_YEARS}"));
    }
    if run.simulations == 0 {
        return Err("--simulations must be > 0".to_string());
    }
    if u64::from(run.years) * u64::from(run.simulations) > MAX_SIMULATION_YEARS {
        return Err(format!(
            "--years x --simulations must be <= {MAX_SIMULATION_YEARS}, got {} x {}",
            run.years, run.simulations
        ));
    }

    Ok(RunOptions {
        seed: (!run.entropy).then_some(run.seed),
        layout: run.layout,
    })
}

fn check_volatility(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{name} must be >= 0"));
    }
    Ok(())
}

fn check_calendar_year(name: &str, year: i32) -> Result<(), String> {
    if !CALENDAR_YEARS.contains(&year) {
        return Err(format!(
            "{name} must be between {} and {}",
            CALENDAR_YEARS.start(),
            CALENDAR_YEARS.end()
        ));
    }
    Ok(())
}

fn build_accumulation_request(args: AccumulateArgs) -> Result<AccumulationRequest, String> {
    let options = build_run_options(&args.run)?;

    if !args.start_capital.is_finite() || args.start_capital < 0.0 {
        return Err("--start-capital must be >= 0".to_string());
    }
    if !args.monthly_contribution.is_finite() || args.monthly_contribution < 0.0 {
        return Err("--monthly-contribution must be >= 0".to_string());
    }
    check_volatility("--return-volatility", args.return_volatility)?;
    check_volatility("--raise-volatility", args.raise_volatility)?;
    if !args.raise_mean.is_finite() || args.raise_mean <= -100.0 {
        return Err("--raise-mean must be > -100".to_string());
    }

    let start_year = args.start_year.unwrap_or_else(current_year);
    check_calendar_year("--start-year", start_year)?;
    if let Some(birth_year) = args.birth_year {
        check_calendar_year("--birth-year", birth_year)?;
        if birth_year > start_year {
            return Err("--birth-year must be <= --start-year".to_string());
        }
    }

    Ok(AccumulationRequest {
        inputs: AccumulationInputs {
            start_capital: args.start_capital,
            return_mean: args.return_mean,
            return_stdev: args.return_volatility,
            raise_mean: args.raise_mean,
            raise_stdev: args.raise_volatility,
            monthly_contribution: args.monthly_contribution,
            years: args.run.years,
            simulations: args.run.simulations,
        },
        axis: AccumulationAxis {
            start_year,
            birth_year: args.birth_year,
        },
        options,
    })
}

fn build_decumulation_request(args: DecumulateArgs) -> Result<DecumulationRequest, String> {
    let options = build_run_options(&args.run)?;

    if !args.start_capital.is_finite() || args.start_capital < 0.0 {
        return Err("--start-capital must be >= 0".to_string());
    }
    if !args.monthly_withdrawal.is_finite() || args.monthly_withdrawal < 0.0 {
        return Err("--monthly-withdrawal must be >= 0".to_string());
    }
    check_volatility("--return-volatility", args.return_volatility)?;
    check_volatility("--inflation-volatility", args.inflation_volatility)?;
    check_volatility("--withdrawal-noise", args.withdrawal_noise)?;
    if args.retire_age > MAX_RETIRE_AGE {
        return Err(format!("--retire-age must be <= {MAX_RETIRE_AGE}"));
    }
    if !(0.0..=100.0).contains(&args.success_threshold) {
        return Err("--success-threshold must be between 0 and 100".to_string());
    }

    Ok(DecumulationRequest {
        inputs: DecumulationInputs {
            start_capital: args.start_capital,
            return_mean: args.return_mean,
            return_stdev: args.return_volatility,
            inflation_mean: args.inflation_mean,
            inflation_stdev: args.inflation_volatility,
            monthly_withdrawal: args.monthly_withdrawal,
            withdrawal_stdev: args.withdrawal_noise,
            years: args.run.years,
            simulations: args.run.simulations,
            ruin: args.ruin.into(),
        },
        retire_age: args.retire_age,
        success_threshold: args.success_threshold,
        options,
    })
}

fn table_response(table: &BalanceTable, layout: CliLayout) -> TableResponse {
    TableResponse {
        unit: table.unit(),
        layout: layout.into(),
        months: table.months(),
        simulations: table.simulations(),
        balances: table.to_nested(layout.into()),
    }
}

fn run_accumulation(request: &AccumulationRequest) -> Result<AccumulationResponse, String> {
    let mut rng = seeded_rng(request.options.seed);
    let table = simulate_accumulation(&request.inputs, &mut rng)?;
    Ok(AccumulationResponse {
        seed: request.options.seed,
        chart: accumulation_chart(&table, request.axis),
        table: table_response(&table, request.options.layout),
    })
}

fn run_decumulation(request: &DecumulationRequest) -> Result<DecumulationResponse, String> {
    let mut rng = seeded_rng(request.options.seed);
    let table = simulate_decumulation(&request.inputs, &mut rng)?;
    Ok(DecumulationResponse {
        seed: request.options.seed,
        ruin: request.inputs.ruin,
        chart: decumulation_chart(&table, request.retire_age, request.success_threshold),
        table: table_response(&table, request.options.layout),
    })
}

fn accumulation_summary(response: &AccumulationResponse) -> String {
    let chart = &response.chart;
    let mut out = format!("{}\n", chart.title);
    out.push_str(&format!(
        "{:>10} {:>16} {:>16} {:>16}\n",
        "year", "p10", "median", "p90"
    ));
    for (year, tick) in chart.ticks.iter().enumerate() {
        let row = year * 12;
        out.push_str(&format!(
            "{:>10} {:>16.2} {:>16.2} {:>16.2}\n",
            tick.label.replace('\n', " "),
            chart.bands.p10[row],
            chart.bands.median[row],
            chart.bands.p90[row]
        ));
    }
    out
}

fn decumulation_summary(response: &DecumulationResponse) -> String {
    let chart = &response.chart;
    let mut out = format!("{} (millions)\n", chart.title);
    out.push_str(&format!(
        "{:>5} {:>12} {:>12} {:>12} {:>10}\n",
        "age", "p10", "median", "p90", "paying"
    ));
    for (year, tick) in chart.ticks.iter().enumerate() {
        let row = year * 12;
        out.push_str(&format!(
            "{:>5} {:>12.4} {:>12.4} {:>12.4} {:>9.1}%\n",
            tick.label,
            chart.bands.p10[row],
            chart.bands.median[row],
            chart.bands.p90[row],
            chart.survival[row].percent
        ));
    }
    out.push_str(&format!(
        "{}: {:.1}% at the horizon (threshold {:.1}%)\n",
        chart.survival_title, chart.final_survival_percent, chart.scenario_percent
    ));
    out
}

fn render<T: Serialize>(
    response: &T,
    output: CliOutput,
    summary: fn(&T) -> String,
) -> Result<String, String> {
    match output {
        CliOutput::Json => serde_json::to_string_pretty(response)
            .map_err(|e| format!("failed to serialize response: {e}")),
        CliOutput::Summary => Ok(summary(response)),
    }
}

/// Entry point for the `nestegg` binary.
pub async fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => run_http_server(port)
            .await
            .map_err(|e| format!("Server error: {e}")),
        Command::Accumulate(args) => {
            let output = args.run.output;
            let request = build_accumulation_request(args)?;
            let response = run_accumulation(&request)?;
            println!("{}", render(&response, output, accumulation_summary)?);
            Ok(())
        }
        Command::Decumulate(args) => {
            let output = args.run.output;
            let request = build_decumulation_request(args)?;
            let response = run_decumulation(&request)?;
            println!("{}", render(&response, output, decumulation_summary)?);
            Ok(())
        }
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/accumulate",
            get(accumulate_get_handler).post(accumulate_post_handler),
        )
        .route(
            "/api/decumulate",
            get(decumulate_get_handler).post(decumulate_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!("nestegg HTTP API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn accumulate_get_handler(Query(payload): Query<AccumulatePayload>) -> Response {
    accumulate_handler_impl(payload)
}

async fn accumulate_post_handler(Json(payload): Json<AccumulatePayload>) -> Response {
    accumulate_handler_impl(payload)
}

async fn decumulate_get_handler(Query(payload): Query<DecumulatePayload>) -> Response {
    decumulate_handler_impl(payload)
}

async fn decumulate_post_handler(Json(payload): Json<DecumulatePayload>) -> Response {
    decumulate_handler_impl(payload)
}

fn accumulate_handler_impl(payload: AccumulatePayload) -> Response {
    let result = accumulation_request_from_payload(payload)
        .and_then(|request| run_accumulation(&request));
    match result {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => {
            warn!("rejected accumulation request: {msg}");
            error_response(StatusCode::BAD_REQUEST, &msg)
        }
    }
}

fn decumulate_handler_impl(payload: DecumulatePayload) -> Response {
    let result = decumulation_request_from_payload(payload)
        .and_then(|request| run_decumulation(&request));
    match result {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => {
            warn!("rejected decumulation request: {msg}");
            error_response(StatusCode::BAD_REQUEST, &msg)
        }
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn apply_run_payload(
    run: &mut RunArgs,
    years: Option<u32>,
    simulations: Option<u32>,
    seed: Option<u64>,
    entropy: Option<bool>,
    layout: Option<ApiLayout>,
) {
    if let Some(v) = years {
        run.years = v;
    }
    if let Some(v) = simulations {
        run.simulations = v;
    }
    if let Some(v) = seed {
        run.seed = v;
    }
    if let Some(v) = entropy {
        run.entropy = v;
    }
    if let Some(v) = layout {
        run.layout = v.into();
    }
}

fn accumulation_request_from_payload(
    payload: AccumulatePayload,
) -> Result<AccumulationRequest, String> {
    let mut args = default_accumulate_args_for_api();

    if let Some(v) = payload.start_capital {
        args.start_capital = v;
    }
    if let Some(v) = payload.return_mean {
        args.return_mean = v;
    }
    if let Some(v) = payload.return_vol {
        args.return_volatility = v;
    }
    if let Some(v) = payload.raise_mean {
        args.raise_mean = v;
    }
    if let Some(v) = payload.raise_vol {
        args.raise_volatility = v;
    }
    if let Some(v) = payload.monthly_contribution {
        args.monthly_contribution = v;
    }
    if let Some(v) = payload.start_year {
        args.start_year = Some(v);
    }
    if let Some(v) = payload.birth_year {
        args.birth_year = Some(v);
    }
    apply_run_payload(
        &mut args.run,
        payload.years,
        payload.simulations,
        payload.seed,
        payload.entropy,
        payload.layout,
    );

    build_accumulation_request(args)
}

fn decumulation_request_from_payload(
    payload: DecumulatePayload,
) -> Result<DecumulationRequest, String> {
    let mut args = default_decumulate_args_for_api();

    if let Some(v) = payload.start_capital {
        args.start_capital = v;
    }
    if let Some(v) = payload.return_mean {
        args.return_mean = v;
    }
    if let Some(v) = payload.return_vol {
        args.return_volatility = v;
    }
    if let Some(v) = payload.inflation_mean {
        args.inflation_mean = v;
    }
    if let Some(v) = payload.inflation_vol {
        args.inflation_volatility = v;
    }
    if let Some(v) = payload.monthly_withdrawal {
        args.monthly_withdrawal = v;
    }
    if let Some(v) = payload.withdrawal_noise {
        args.withdrawal_noise = v;
    }
    if let Some(v) = payload.retire_age {
        args.retire_age = v;
    }
    if let Some(v) = payload.success_threshold {
        args.success_threshold = v;
    }
    if let Some(v) = payload.ruin {
        args.ruin = v.into();
    }
    apply_run_payload(
        &mut args.run,
        payload.years,
        payload.simulations,
        payload.seed,
        payload.entropy,
        payload.layout,
    );

    build_decumulation_request(args)
}

fn default_run_args_for_api() -> RunArgs {
    RunArgs {
        years: 30,
        simulations: 100,
        seed: 42,
        entropy: false,
        layout: CliLayout::Columns,
        output: CliOutput::Json,
    }
}

fn default_accumulate_args_for_api() -> AccumulateArgs {
    let defaults = AccumulationInputs::default();
    AccumulateArgs {
        start_capital: defaults.start_capital,
        return_mean: defaults.return_mean,
        return_volatility: defaults.return_stdev,
        raise_mean: defaults.raise_mean,
        raise_volatility: defaults.raise_stdev,
        monthly_contribution: defaults.monthly_contribution,
        start_year: None,
        birth_year: None,
        run: default_run_args_for_api(),
    }
}

fn default_decumulate_args_for_api() -> DecumulateArgs {
    let defaults = DecumulationInputs::default();
    DecumulateArgs {
        start_capital: defaults.start_capital,
        return_mean: defaults.return_mean,
        return_volatility: defaults.return_stdev,
        inflation_mean: defaults.inflation_mean,
        inflation_volatility: defaults.inflation_stdev,
        monthly_withdrawal: defaults.monthly_withdrawal,
        withdrawal_noise: defaults.withdrawal_stdev,
        retire_age: 65,
        success_threshold: 90.0,
        ruin: CliRuinPolicy::Terminal,
        run: default_run_args_for_api(),
    }
}
