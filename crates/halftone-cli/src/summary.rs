use std::path::Path;

use console::Style;
use halftone_core::pipeline::config::HalftoneConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(input: &Path, output: &Path, config: &HalftoneConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Halftone"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Box"),
        s.value.apply_to(format!("{} px", config.box_size))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{}x", config.scale))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(config.luma_threshold)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Luma"),
        s.method.apply_to(config.luma_weighting)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sizing"),
        s.method.apply_to(config.sizing)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Fill"),
        s.method.apply_to(config.fill)
    );
    println!();
}
