use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    /// Root with the standard fixture: one matched pair (`a`), a
    /// real-only template (`b`), a non-html file (`c.txt`), and a
    /// fake-only template (`d`).
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = make_fixture_root(tmp.path());
        Self { _tmp: tmp, root }
    }

    /// Root with empty `real/` and `fake/` folders.
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("templates");
        fs::create_dir_all(root.join("real")).expect("create real folder");
        fs::create_dir_all(root.join("fake")).expect("create fake folder");
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mailpair").expect("binary under test");
        cmd.arg("--root").arg(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_template(&self, folder: &str, name: &str) {
        fs::write(
            self.root.join(folder).join(name),
            "<html><body>fixture</body></html>\n",
        )
        .expect("write template");
    }

    pub fn remove_template(&self, folder: &str, name: &str) {
        fs::remove_file(self.root.join(folder).join(name)).expect("remove template");
    }

    pub fn manifest_bytes(&self) -> Vec<u8> {
        fs::read(self.root.join("manifest.json")).expect("read manifest")
    }

    pub fn manifest_json(&self) -> Value {
        serde_json::from_slice(&self.manifest_bytes()).expect("valid manifest json")
    }
}

fn make_fixture_root(base: &Path) -> PathBuf {
    let root = base.join("templates");
    fs::create_dir_all(root.join("real")).expect("create real folder");
    fs::create_dir_all(root.join("fake")).expect("create fake folder");

    fs::write(root.join("real/a.html"), "<html>real a</html>\n").expect("write real a");
    fs::write(root.join("real/b.html"), "<html>real b</html>\n").expect("write real b");
    fs::write(root.join("real/c.txt"), "not a template\n").expect("write c.txt");
    fs::write(root.join("fake/a.html"), "<html>fake a</html>\n").expect("write fake a");
    fs::write(root.join("fake/d.html"), "<html>fake d</html>\n").expect("write fake d");

    root
}
