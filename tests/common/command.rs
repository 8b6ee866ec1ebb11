use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn page_a() -> String {
    r#"export default function Page() {
  return (
    <main>
      <Hero title="Welcome" />
      <ProductGrid columns={3} />
      <Footer />
    </main>
  );
}
"#
    .to_string()
}

#[fixture]
pub fn page_b() -> String {
    r#"export default function Page() {
  return (
    <main>
      <Banner />
      <Hero title="Welcome back" />
      <ProductGrid columns={3} />
    </main>
  );
}
"#
    .to_string()
}

/// Temp dir holding `a.tsx` and `b.tsx`.
#[fixture]
pub fn page_dir(work_dir: TempDir, page_a: String, page_b: String) -> TempDir {
    write_file(FileSpec::new(work_dir.path().join("a.tsx"), page_a));
    write_file(FileSpec::new(work_dir.path().join("b.tsx"), page_b));

    work_dir
}

pub fn run_linepatch_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linepatch").expect("Failed to find linepatch binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is utf-8")
}
