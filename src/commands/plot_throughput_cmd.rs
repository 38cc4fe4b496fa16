use crate::commands::base_commands::Commands;
use crate::services::throughput_builder::{build_throughput, weekly_throughput};
use crate::services::throughput_plot::write_throughput_png;
use crate::services::work_items_yaml::deserialize_work_items_from_yaml_str;

pub fn plot_throughput_command(cmd: Commands) {
    if let Commands::PlotThroughput {
        input,
        member,
        output,
    } = cmd
    {
        let contents = match std::fs::read_to_string(&input) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read work item records: {e:?}");
                return;
            }
        };
        let records = match deserialize_work_items_from_yaml_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Failed to parse work item records: {e:?}");
                return;
            }
        };

        let throughput = match build_throughput(&records, &member) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("Failed to build throughput: {e}");
                return;
            }
        };

        let weekly = weekly_throughput(&throughput);
        if let Err(e) = write_throughput_png(&output, &weekly) {
            eprintln!("Failed to render throughput plot: {e:?}");
            return;
        }

        println!("Throughput plot written to {output}");
    }
}
