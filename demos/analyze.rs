use bpmn_lint::{Analyzer, Thresholds};

extern crate pretty_env_logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "demos/order.bpmn".into());

    // Optional second argument: thresholds as JSON
    let thresholds = match args.next() {
        Some(file) => Thresholds::from_json(&std::fs::read_to_string(file)?)?,
        None => Thresholds::default(),
    };

    let result = Analyzer::new().thresholds(thresholds).analyze_file(&path)?;
    println!("{}", result.to_json_pretty()?);
    Ok(())
}
