use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_client::{
    config::ClientConfig,
    domain::{
        models::{
            image::ProfileImage,
            registration::SignUpFields,
            route::{LOGOUT_PATH, Route, SIDE_MENU_DATA},
        },
        services::{navigator::Navigator, user_context::UserContext},
    },
    infrastructure::{
        file_session_repository::FileSessionRepository,
        http_auth_repository::HttpAuthRepository, route_recorder::RouteRecorder,
        temp_file_preview_provider::TempFilePreviewProvider,
    },
    presentation::handlers::{side_menu_handler::SideMenu, sign_up_handler::SignUpForm},
    usecase::{
        register_user_usecase::RegisterUserUsecase,
        restore_session_usecase::RestoreSessionUsecase,
    },
};

#[derive(Parser)]
#[command(name = "expense-client")]
#[command(about = "Expense tracker account client")]
struct Cli {
    /// Api base url, overrides EXPENSE_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Session file, overrides EXPENSE_SESSION_FILE
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "EXPENSE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Profile photo to upload
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Show the side menu for the signed-in user
    Menu {
        #[arg(long, default_value = "Dashboard")]
        active: String,
    },
    /// Click a side menu entry ("logout" signs out)
    Navigate { path: String },
    /// Sign out and clear stored session
    Logout,
    /// Print the signed-in user
    Whoami,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "expense_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // loaded before parsing so clap `env` args can see `.env`
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.base_url = api_url.trim_end_matches('/').to_string();
    }
    if let Some(session_file) = cli.session_file {
        config.session_file = session_file;
    }

    let session_repository = FileSessionRepository::new(&config.session_file);
    let user_context = UserContext::new();
    let token = RestoreSessionUsecase::new(session_repository.clone(), user_context.clone())
        .restore()
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "could not restore session, continuing signed out");
            None
        });
    let navigator = RouteRecorder::starting_at(match token {
        Some(_) => Route::dashboard(),
        None => Route::login(),
    });

    let menu = SideMenu::new(
        session_repository.clone(),
        navigator.clone(),
        user_context.clone(),
    );

    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
            photo,
        } => {
            navigator.go_to(&Route::new(Route::SIGNUP));
            let mut form = SignUpForm::new(Arc::new(TempFilePreviewProvider::in_temp_dir()));
            form.fields = SignUpFields::new(name, email, password);

            if let Some(path) = photo {
                let bytes = tokio::fs::read(&path).await?;
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("profile.png")
                    .to_string();
                form.photo.choose(ProfileImage::from_file_name(bytes, file_name)?)?;
            }

            let usecase = RegisterUserUsecase::new(
                HttpAuthRepository::new(&config)?,
                session_repository,
                navigator.clone(),
                user_context,
            );

            if form.handle_sign_up(&usecase).await.is_none() {
                println!("{}", form.render());
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", menu.render(&active_label(&navigator)));
        }
        Commands::Menu { active } => {
            println!("{}", menu.render(&active));
        }
        Commands::Navigate { path } => {
            menu.handle_click(&path).await?;
            info!(route = ?navigator.current(), "current route");
            println!("{}", menu.render(&active_label(&navigator)));
        }
        Commands::Logout => {
            menu.handle_click(LOGOUT_PATH).await?;
            println!("Signed out");
        }
        Commands::Whoami => match user_context.read() {
            Some(user) => println!("{} <{}>", user.full_name(), user.email()),
            None => {
                println!("Not signed in");
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

/// Menu label matching the current route, empty when none does
fn active_label(navigator: &RouteRecorder) -> String {
    navigator
        .current()
        .and_then(|route| {
            SIDE_MENU_DATA
                .iter()
                .find(|item| item.path == route.as_str())
                .map(|item| item.label.to_string())
        })
        .unwrap_or_default()
}
