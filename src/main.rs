//! Sample test suite: the unit tests of a scoped-resource guard, run through
//! the harness. `testset [SET]...` runs the named sets, or all of them.

mod scoped;

use std::process::ExitCode;

fn main() -> ExitCode {
    testset::cli::main()
}
