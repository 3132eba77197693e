//! One-shot rendering to a string, used by `--headless`.

use crate::cli::OutputFormat;
use crate::component::greeting::{GreetingIntent, GreetingPanel, GreetingProps};
use crate::ui::mvi::Host;

/// Mount the panel, press increment `clicks` times, render once and unmount.
pub fn render_once(
    props: GreetingProps,
    clicks: u32,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut host = Host::<GreetingPanel>::mount(props);
    for _ in 0..clicks {
        host.dispatch(GreetingIntent::Increment);
    }

    let view = host.view();
    let output = match format {
        OutputFormat::Text => view.to_string(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(view)?;
            json.push('\n');
            json
        }
    };

    let state = host.unmount();
    tracing::debug!(count = state.count, "headless render done");
    Ok(output)
}
