mod chronometer;
mod configuration;
mod error;
mod logger;
mod profile;

use self::{
    chronometer::Chronometer,
    configuration::{Configuration, Mode},
    error::Error,
    logger::Logger,
};
use bincodec::Codec;
use std::{
    io::{self, Read, Write},
    process, str,
};

fn wrap(encoded: &str, line_width: Option<usize>) -> String {
    let mut output = String::with_capacity(encoded.len() + 1);
    for (index, symbol) in encoded.chars().enumerate() {
        if let Some(width) = line_width {
            if index > 0 && index % width == 0 {
                output.push('\n');
            }
        }
        output.push(symbol);
    }
    output.push('\n');
    output
}

fn run(configuration: &Configuration, logger: &Logger) -> Result<(), Error> {
    let codec = configuration.profile().build()?;
    logger.log(format!("Codec ready ({} bits per symbol)", codec.width()));

    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;
    logger.log(format!("Read {} bytes", input.len()));

    let mut stdout = io::stdout().lock();
    match configuration.mode() {
        Mode::Encode => {
            let encoded = codec.encode(&input);
            stdout.write_all(wrap(&encoded, configuration.line_width()).as_bytes())?;
            logger.log(format!("Encoded {} symbols", codec.encoded_size(input.len())));
        }
        Mode::Decode => {
            let text = str::from_utf8(&input).map_err(|_| Error::new("Input is not valid UTF-8"))?;
            let decoded = codec.decode(text)?;
            stdout.write_all(&decoded)?;
            logger.log(format!("Decoded {} bytes", decoded.len()));
        }
    }
    stdout.flush()?;
    Ok(())
}

fn main() {
    let logger = Logger::new();
    let result = Configuration::new().and_then(|configuration| run(&configuration, &logger));
    if let Err(error) = result {
        eprintln!("{}", error);
        process::exit(1);
    }
}
