use clap::{App, Arg};

/// Generates the command line interface.
pub fn generate_cli() -> App<'static, 'static> {
    App::new("Permission Review")
        .version(clap::crate_version!())
        .about("Replays an Android runtime permission review session")
        .arg(
            Arg::with_name("app")
                .help("TOML file describing the permission groups requested by the app")
                .value_name("APP_FILE")
                .required(true)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .conflicts_with("quiet")
                .help("If you'd like the tool to explain each step it takes"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .conflicts_with("verbose")
                .help("If you'd like a zen review, only the final report is printed"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Prints the review report as JSON"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("CONFIG_FILE")
                .takes_value(true)
                .help("Loads the configuration from the given file"),
        )
        .arg(
            Arg::with_name("revoked")
                .long("revoked")
                .value_name("PERMISSION")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Permission that starts the review already revoked"),
        )
        .arg(
            Arg::with_name("allow")
                .long("allow")
                .value_name("PERMISSION")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Flips the switch of an individually controlled permission on"),
        )
        .arg(
            Arg::with_name("deny")
                .long("deny")
                .value_name("PERMISSION")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Flips the switch of an individually controlled permission off"),
        )
        .arg(
            Arg::with_name("grant-group")
                .long("grant-group")
                .value_name("GROUP")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Allows every permission of the group and its background group"),
        )
        .arg(
            Arg::with_name("revoke-group")
                .long("revoke-group")
                .value_name("GROUP")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Denies every permission of the group and its background group"),
        )
}
