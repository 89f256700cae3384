//! `regm show <program>`

use super::find_program;
use crate::CliError;

/// Render a reference program's registers and instruction tree.
pub fn show(args: &[String]) -> Result<String, CliError> {
    let [name] = args else {
        return match args.get(1) {
            Some(extra) => Err(CliError::UnexpectedArgument { arg: extra.clone() }),
            None => Err(CliError::Missing {
                what: "program name",
            }),
        };
    };
    let reference = find_program(name)?;
    let program = (reference.program)();
    Ok(format!(
        "{program:#}\n({} nodes, depth {})",
        program.expr.node_count(),
        program.expr.depth()
    ))
}
