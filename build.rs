use std::process::Command;

fn main() {
    // Build metadata for `regform version --verbose`. Environment variables
    // win over shelling out so container builds can pin both values.
    println!("cargo:rustc-env=GIT_SHA={}", git_sha());
    println!("cargo:rustc-env=BUILD_DATE={}", build_date());
}

fn git_sha() -> String {
    std::env::var("GIT_SHA").unwrap_or_else(|_| {
        command_output("git", &["rev-parse", "--short", "HEAD"])
    })
}

fn build_date() -> String {
    std::env::var("BUILD_DATE").unwrap_or_else(|_| command_output("date", &["+%Y-%m-%d"]))
}

fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
