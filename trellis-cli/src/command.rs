use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit debug logs, including every file the command touches.
    #[clap(long, env = "TRELLIS_DEBUG")]
    pub debug: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new controller for the application in the current directory.
    Controller(ControllerArgs),
}

#[derive(Args, Debug)]
pub struct ControllerArgs {
    /// Print the generated controller instead of writing it to
    /// `application/controller/<name>.rs`.
    #[clap(long)]
    pub dump: bool,
    /// Mount prefix of the controller. Defaults to the application root.
    #[clap(long)]
    pub route: Option<String>,
    /// One line synopsis written into the controller header.
    #[clap(long)]
    pub description: Option<String>,
    /// Author name. Defaults to the current user.
    #[clap(long)]
    pub author: Option<String>,
    /// Author email. Defaults to `<user>@localhost`.
    #[clap(long)]
    pub email: Option<String>,
    /// Platforms the controller supports. Defaults to the host platform.
    #[clap(long)]
    pub platforms: Option<String>,
    /// Controller name, e.g. `blog_posts` or `BlogPosts`.
    #[arg(index = 1)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_controller_defaults() {
        let cli = Cli::try_parse_from(["trellis", "controller", "test_controller"]).unwrap();
        let Command::Controller(args) = cli.command;
        assert_eq!(args.name, "test_controller");
        assert!(!args.dump);
        assert_eq!(args.route, None);
        assert_eq!(args.description, None);
    }

    #[test]
    fn test_parse_controller_flags() {
        let cli = Cli::try_parse_from([
            "trellis",
            "controller",
            "--dump",
            "--route",
            "/home",
            "--description",
            "Home page",
            "home",
        ])
        .unwrap();
        let Command::Controller(args) = cli.command;
        assert!(args.dump);
        assert_eq!(args.route.as_deref(), Some("/home"));
        assert_eq!(args.description.as_deref(), Some("Home page"));
        assert_eq!(args.name, "home");
    }

    #[test]
    fn test_wrong_number_of_args() {
        assert!(Cli::try_parse_from(["trellis", "controller", "test", "wrong"]).is_err());
        assert!(Cli::try_parse_from(["trellis", "controller"]).is_err());
    }
}
