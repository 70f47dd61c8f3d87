pub type CmdResult<T> = resym::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod run;
pub mod symbols;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (resym::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Run(args) => dispatch!(args, global, run),
        crate::Commands::Symbols(args) => dispatch!(args, global, symbols),
    }
}
