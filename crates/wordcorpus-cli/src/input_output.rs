use std::{
    fs::File,
    io::{BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Write one JSON object per line.
pub fn write_json_line<W, V>(
    writer: &mut W,
    value: &V,
) -> Result<(), Box<dyn std::error::Error>>
where
    W: Write + ?Sized,
    V: serde::Serialize,
{
    serde_json::to_writer(&mut *writer, value)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(
            squash_standard_io(&Some("out.jsonl".to_string())),
            Some("out.jsonl".to_string())
        );
    }

    #[test]
    fn test_write_json_line() {
        let mut buf: Vec<u8> = Vec::new();
        write_json_line(&mut buf, &[1, 2]).unwrap();
        write_json_line(&mut buf, &"x").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[1,2]\n\"x\"\n");
    }
}
