use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{Input, Password, Select};
use dotenvy::dotenv;
use rawda::{DashboardScreen, LoginScreen, Screen, Shell};
use rawda_config::ShellConfig;
use rawda_i18n::Language;
use rawda_models::View;
use rawda_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "rawda")]
#[command(about = "Rawda - kindergarten management shell", long_about = None)]
struct Cli {
    /// Starting language (en or ar); overrides RAWDA_DEFAULT_LANGUAGE
    #[arg(short = 'l', long)]
    lang: Option<String>,

    /// Offer the install entry in the sidebar
    #[arg(long)]
    show_install: bool,

    /// Print each screen as JSON instead of drawing it
    #[arg(long)]
    json: bool,
}

/// What the user picked on the dashboard.
enum Action {
    Open(View),
    Profile,
    Install,
    ToggleLanguage,
    ToggleMenu,
    Logout,
    Quit,
}

fn main() -> Result<()> {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    let mut config = ShellConfig::from_env();
    if let Some(lang) = &cli.lang {
        config.default_language =
            Language::parse(lang).with_context(|| format!("unsupported language: {}", lang))?;
    }
    config.show_install_button |= cli.show_install;

    let mut shell = Shell::from_config(&config).context("Failed to start shell")?;

    loop {
        let screen = shell.render();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&screen)?);
        }
        let keep_going = match screen {
            Screen::Login(login) => login_step(&mut shell, &login, cli.json)?,
            Screen::Dashboard(dashboard) => dashboard_step(&mut shell, &dashboard, cli.json)?,
        };
        if !keep_going {
            break;
        }
    }

    Ok(())
}

fn login_step(shell: &mut Shell, login: &LoginScreen, quiet: bool) -> Result<bool> {
    if !quiet {
        println!();
        println!("== {} ==", login.app_title);
        println!("{}", login.login_title);
        if let Some(error) = &login.error {
            println!("! {}", error);
        }
    }

    let choices = [
        login.submit_label.clone(),
        login.language_switch.clone(),
        "Quit".to_string(),
    ];
    let choice = Select::new().items(&choices).default(0).interact()?;

    match choice {
        0 => {
            let username: String = Input::new()
                .with_prompt(&login.username_label)
                .allow_empty(true)
                .interact_text()?;
            let password = Password::new()
                .with_prompt(&login.password_label)
                .allow_empty_password(true)
                .interact()?;
            // A failure is shown on the next render.
            let _ = shell.submit_login(&username, &password);
            Ok(true)
        }
        1 => {
            shell.toggle_language();
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn dashboard_step(shell: &mut Shell, dashboard: &DashboardScreen, quiet: bool) -> Result<bool> {
    let sidebar = &dashboard.sidebar;
    if !quiet {
        println!();
        println!("== {} | {} ==", sidebar.app_title, sidebar.app_subtitle);
        println!(
            "{} ({}) [{}]",
            sidebar.profile.name, sidebar.profile.role_label, dashboard.active_view
        );
    }

    let mut labels = Vec::new();
    let mut actions = Vec::new();
    for entry in &sidebar.entries {
        let marker = if entry.active { "*" } else { " " };
        labels.push(format!("{} {} ({})", marker, entry.label, entry.icon.name()));
        actions.push(Action::Open(entry.id));
    }
    let profile_marker = if sidebar.profile.active { "*" } else { " " };
    labels.push(format!("{} {}", profile_marker, sidebar.profile.name));
    actions.push(Action::Profile);
    if let Some(install) = &sidebar.install {
        labels.push(format!("  {}", install));
        actions.push(Action::Install);
    }
    labels.push(format!("  {}", sidebar.language_switch));
    actions.push(Action::ToggleLanguage);
    labels.push(format!("  [{}]", if sidebar.mobile_open { "-" } else { "≡" }));
    actions.push(Action::ToggleMenu);
    labels.push(format!("  {}", sidebar.logout_label));
    actions.push(Action::Logout);
    labels.push("  Quit".to_string());
    actions.push(Action::Quit);

    let choice = Select::new().items(&labels).default(0).interact()?;

    match &actions[choice] {
        Action::Open(view) => shell.select_view(*view)?,
        Action::Profile => shell.open_profile()?,
        Action::Install => {
            shell.request_install(&mut || println!("Installing is handled by the host platform."));
        }
        Action::ToggleLanguage => shell.toggle_language(),
        Action::ToggleMenu => shell.toggle_mobile_menu(!sidebar.mobile_open)?,
        Action::Logout => shell.logout(),
        Action::Quit => return Ok(false),
    }
    Ok(true)
}
