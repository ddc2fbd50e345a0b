use anyhow::Context;
use clap::Parser;

use planwiz::domain::catalog::catalog;
use planwiz::domain::model::WizardData;
use planwiz::infra::config::Config;
use planwiz::ui::app::WizardApp;
use planwiz::ui::icons::IconSet;
use planwiz::ui::theme::ThemeKind;

#[derive(Parser)]
#[command(author, version, about = "Choose the scope of a project-based learning plan", long_about = None)]
struct Cli {
    /// Color theme for the wizard screens
    #[arg(long, value_enum)]
    theme: Option<ThemeKind>,
    /// Icon set used on the scope cards
    #[arg(long, value_enum)]
    icons: Option<IconSet>,
    /// Existing wizard answers as a JSON object
    #[arg(long, value_name = "JSON")]
    data: Option<String>,
    /// Print the scope catalog as JSON and exit
    #[arg(long)]
    print_catalog: bool,
}

fn main() -> anyhow::Result<()> {
    planwiz::init();
    let cli = Cli::parse();

    if cli.print_catalog {
        let rendered =
            serde_json::to_string_pretty(catalog()).context("failed to serialize catalog")?;
        println!("{rendered}");
        return Ok(());
    }

    let data = match cli.data {
        Some(raw) => serde_json::from_str::<WizardData>(&raw)
            .context("--data must be a JSON object of wizard answers")?,
        None => WizardData::default(),
    };

    let mut config = Config::load()?;
    if let Some(theme) = cli.theme {
        config.appearance.set_theme(theme);
    }
    if let Some(icons) = cli.icons {
        config.appearance.set_icons(icons);
    }

    if let Some(answers) = WizardApp::new(&config, data).run()? {
        println!("{}", serde_json::to_string(&answers)?);
    }
    Ok(())
}
