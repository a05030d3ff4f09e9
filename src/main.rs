use cc_hooks::Hook;
use std::process::ExitCode;

mod policy;

fn main() -> ExitCode {
    Hook::sync(policy::handle).run()
}
