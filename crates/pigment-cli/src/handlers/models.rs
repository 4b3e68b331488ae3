//! Handler for the `models` command.

use pigment_core::ModelCatalog;

/// Print the alias table the relay accepts.
pub fn execute() {
    let catalog = ModelCatalog::builtin();
    println!("Available models (default: {}):", catalog.default_alias());
    for (alias, id) in catalog.iter() {
        println!("  {alias:<24} {id}");
    }
}
