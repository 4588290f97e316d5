use hostcall_cli::commands::HostcallCmd;

fn main() {
    HostcallCmd::run();
}
