use std::fs;

use cxcalc::{interpreter::session::Session, run_script};
use walkdir::WalkDir;

#[test]
fn sample_scripts_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        let mut session = Session::new();
        for report in run_script(&source, &mut session) {
            if let Err(e) = &report.result {
                panic!("Line {} of {:?} failed: {e}", report.line, path);
            }
            assert!(report.diagnostics.is_empty(),
                    "Line {} of {:?} raised diagnostics: {:?}",
                    report.line,
                    path,
                    report.diagnostics);
        }
    }

    assert!(count > 0, "No sample scripts found in scripts/");
}
