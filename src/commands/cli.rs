use clap::{Arg, ArgAction, Command as ClapCommand};

/// Command line definition of the `planekit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("PlaneKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Read plane regions, compress axis layouts and size cache tiles")
        .arg(
            Arg::new("input")
                .help("Raw plane file")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract a region of the plane")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("axes")
                .short('a')
                .long("axes")
                .help("Compress an axis list such as 'X:512,Y:512,U:5,Time:4'")
                .value_name("AXES")
                .required(false),
        )
        .arg(
            Arg::new("tile")
                .short('t')
                .long("tile")
                .help("Compute the cache tile for the plane")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tiles")
                .long("tiles")
                .help("Read the plane one cache tile at a time")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Plane width in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Plane height in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("pixel-type")
                .long("pixel-type")
                .help("Sample type (int8, uint8, int16, uint16, int32, uint32, float, double)")
                .value_name("TYPE")
                .default_value("uint8"),
        )
        .arg(
            Arg::new("channels")
                .long("channels")
                .help("Channels stored together in each plane")
                .value_name("COUNT")
                .default_value("1"),
        )
        .arg(
            Arg::new("interleaved")
                .long("interleaved")
                .help("Channel samples are interleaved per pixel")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("big-endian")
                .long("big-endian")
                .help("Multi-byte samples are big-endian")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .help("Byte offset of the plane in the input file")
                .value_name("BYTES")
                .default_value("0"),
        )
        .arg(
            Arg::new("pad")
                .long("pad")
                .help("Padding pixels after every row")
                .value_name("PIXELS")
                .default_value("0"),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .help("Region to extract as x,y,width,height")
                .value_name("REGION")
                .required(false),
        )
        .arg(
            Arg::new("proposed")
                .long("proposed")
                .help("Proposed tile as WIDTHxHEIGHT")
                .value_name("WxH")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (.png or .tif for an image, anything else for raw bytes)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the built-in budgets")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
}
