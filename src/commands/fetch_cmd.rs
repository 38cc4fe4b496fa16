use crate::commands::base_commands::Commands;
use crate::services::ado_api::{AdoApiClient, AdoConfig, AuthData, WorkItemSource};
use crate::services::throughput_builder::member_roster;
use crate::services::work_items_yaml::serialize_work_items_to_yaml;

pub fn fetch_command(cmd: Commands) {
    if let Commands::Fetch { config, output } = cmd {
        let ado_config = match AdoConfig::from_yaml_file(&config) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to parse Azure DevOps config: {e:?}");
                return;
            }
        };

        let auth = match AuthData::from_env() {
            Ok(auth) => auth,
            Err(e) => {
                eprintln!("Failed to load Azure DevOps auth: {e:?}");
                return;
            }
        };

        let api_client = match AdoApiClient::new(ado_config, auth) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to create Azure DevOps client: {e:?}");
                return;
            }
        };

        let records = match api_client.closed_work_items() {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Failed to fetch work items: {e:?}");
                return;
            }
        };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_work_items_to_yaml(&mut buffer, &records) {
            eprintln!("Failed to serialize work items to YAML: {e:?}");
            return;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write output file: {e:?}");
            return;
        }

        println!("{} work item records written to {output}", records.len());
        let roster = member_roster(&records);
        if !roster.is_empty() {
            println!("Team members: {}", roster.join(", "));
        }
    }
}
