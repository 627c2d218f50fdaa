use std::sync::Arc;

use conform_pr::{Checker, Reporter as _, TableReporter};
use conform_testing::{PullRequestBuilder, StubProvider};

#[test_log::test(tokio::test)]
async fn test_run_and_report() {
    let pr = PullRequestBuilder::new("fix sorting")
        .with_author("newcomer", false)
        .with_body("Fixes a regression introduced in v1.2.")
        .with_labels(&["not ready"])
        .with_project_field("Board", "Size", "🐋 X-Large")
        .build();
    let stub = StubProvider::new()
        .with_members(&["octocat"])
        .with_pull_request(pr);

    let outcome = Checker::new(Arc::new(stub))
        .run_checks("FerretDB", "newcomer", "PR_1")
        .await
        .unwrap();

    let mut reporter = TableReporter::new(Vec::new());
    reporter.render(&outcome.results).unwrap();
    let verdict = reporter.fail(outcome.is_conformant(), outcome.is_community);
    let table = String::from_utf8(reporter.into_inner()).unwrap();

    let rows: Vec<&str> = table.lines().skip(2).collect();
    assert_eq!(rows.len(), 6);
    assert!(rows[0].contains("That PR can't be merged yet; remove `not ready` label."));
    assert!(rows[1].contains(r#"got "🐋 X-Large" for project "Board"."#));
    assert!(rows[2].contains("Don't worry, maintainers will set it for you."));
    assert!(rows[3].contains("PR title must start with an uppercase letter."));
    assert!(rows[4].starts_with("| Body       | ✅"));
    assert!(rows[5].contains("Don't worry, maintainers will enable it for you."));

    assert_eq!(
        verdict.unwrap_err().to_string(),
        "PR does not conform to the project's standards. Don't worry, maintainers will update it for you."
    );
}
