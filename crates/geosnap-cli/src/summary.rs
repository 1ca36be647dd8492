use std::path::Path;

use console::Style;
use geosnap_core::capture::map_url;
use geosnap_core::georef::Georeference;
use geosnap_core::pipeline::config::BatchConfig;
use geosnap_core::pipeline::BatchItem;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_batch_summary(config: &BatchConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Geosnap Batch"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Host"),
        s.value.apply_to(&config.capture.host)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!(
            "{0}x{0} px",
            config.capture.viewport_px
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Earth model"),
        s.method.apply_to(config.georef.earth_model)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Compression"),
        s.method.apply_to(config.georef.compression)
    );
    println!();

    println!("  {}", s.header.apply_to("Requests"));
    for (i, req) in config.requests.iter().enumerate() {
        println!(
            "    {}. {}  {}",
            s.label.apply_to(i + 1),
            s.path.apply_to(req.path.display()),
            s.value.apply_to(format!("{} m", req.resolution_m))
        );
        println!(
            "       {}",
            s.label.apply_to(map_url(
                &config.capture.host,
                req.latitude,
                req.longitude,
                req.resolution_m
            ))
        );
    }
    println!();
}

pub fn print_batch_results(items: &[BatchItem]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Results"));
    for item in items {
        println!(
            "    {}  {}",
            s.path.apply_to(item.result.output.display()),
            s.value.apply_to(format!("{} m", item.effective_resolution_m))
        );
    }
    println!();
}

pub fn print_georef_summary(output: &Path, width: u32, height: u32, georef: &Georeference) {
    let s = Styles::new();
    let origin = georef.origin();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{width}x{height}"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Top-left"),
        s.value.apply_to(origin)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!(
            "{:.3e} x {:.3e} deg/px",
            georef.pixel_scale[0], georef.pixel_scale[1]
        ))
    );
    println!();
}
