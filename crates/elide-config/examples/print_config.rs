/// Example program to print the loaded configuration
///
/// Run with: cargo run -p elide-config --example print_config

fn main() {
    // Load configuration from elide.toml
    let config = elide_config::ElideConfig::load();

    println!("=== elide Configuration ===\n");

    println!("Truncate Settings:");
    println!("  Max Lines: {:?}", config.truncate.max_lines);
    println!("  Max Height: {:?}", config.truncate.max_height);
    println!("  Text Selector: {:?}", config.truncate.text_selector);
    println!("  Attributes: {:?}", config.truncate.attributes.to_vec());
    println!("  Ellipsis: {:?}", config.truncate.ellipsis);
    println!();

    println!("Layout Settings:");
    println!("  Width: {}", config.layout.width);
    println!("  Advance: {}", config.layout.advance);
    println!("  Space Width: {}", config.layout.space_width);
    println!("  Line Height: {}", config.layout.line_height);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
