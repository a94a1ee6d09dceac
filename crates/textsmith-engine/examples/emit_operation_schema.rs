use schemars::schema_for;
use textsmith_engine::Operation;

fn main() {
    let schema = schema_for!(Vec<Operation>);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
