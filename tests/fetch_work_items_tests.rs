use assert_fs::prelude::*;
use predicates::prelude::*;
use std::env;
use std::fs;
use tokio::task;
use warp::Filter;

#[tokio::test()]
async fn test_fetch_work_items() {
    let wiql_response = serde_json::json!({
        "workItems": [
            { "id": 101 },
            { "id": 102 },
            { "id": 103 }
        ]
    });
    let batch_response = serde_json::json!({
        "value": [
            {
                "fields": {
                    "System.Id": 101,
                    "Microsoft.VSTS.Common.ClosedBy": { "displayName": "Ada Lovelace" },
                    "Microsoft.VSTS.Common.ClosedDate": "2024-03-04T15:21:08.59Z",
                    "System.WorkItemType": "User Story"
                }
            },
            {
                "fields": {
                    "System.Id": 102,
                    "Microsoft.VSTS.Common.ClosedBy": { "displayName": "Grace Hopper" },
                    "Microsoft.VSTS.Common.ClosedDate": "2024-03-05T09:02:44.11Z",
                    "System.WorkItemType": "Bug"
                }
            },
            {
                // Still open: no completion data, must be dropped.
                "fields": {
                    "System.Id": 103,
                    "System.WorkItemType": "User Story"
                }
            }
        ]
    });

    let wiql_route = warp::path!("_apis" / "wit" / "wiql")
        .and(warp::post())
        .map(move || warp::reply::json(&wiql_response));
    let batch_route = warp::path!("_apis" / "wit" / "workitemsbatch")
        .and(warp::post())
        .map(move || warp::reply::json(&batch_response));
    let (addr, server) =
        warp::serve(wiql_route.or(batch_route)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let config_yaml = format!("organization_url: http://{addr}\nquery: Select [System.Id] From WorkItems Where [State] = 'Closed'\n");
    let config_file = assert_fs::NamedTempFile::new("ado_config.yaml").unwrap();
    config_file.write_str(&config_yaml).unwrap();

    unsafe {
        env::set_var("ADO_ACCESS_TOKEN", "mocktoken");
    }

    let output_file = assert_fs::NamedTempFile::new("records.yaml").unwrap();
    let config_arg = config_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::Command::cargo_bin("flowcast").unwrap();
        cmd.args(["fetch", "-c", &config_arg, "-o", &output_arg]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("work item records written to"))
            .stdout(predicate::str::contains("Ada Lovelace, Grace Hopper"));
    })
    .await
    .unwrap();

    let output = fs::read_to_string(output_file.path()).unwrap();

    assert!(output.contains("closed_date: 2024-03-04"));
    assert!(output.contains("closed_by: Ada Lovelace"));
    assert!(output.contains("work_item_type: User Story"));
    assert!(output.contains("closed_date: 2024-03-05"));
    assert!(output.contains("closed_by: Grace Hopper"));
    assert!(output.contains("work_item_type: Bug"));
    // The open item carried no closed date and must not appear.
    assert!(!output.contains("103"));
}
