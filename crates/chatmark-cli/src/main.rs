use anyhow::{Context, Result};
use chatmark_config::Config;
use chatmark_engine::{
    Block, Document, InlineContent, InlineNode, ParagraphLine, Renderer, snapshot,
};
use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};
use std::{
    env, fs,
    io::{self, IsTerminal, Read, Write},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: chatmark-cli [--tree] [--no-recover] [FILE]\n\
                     Reads FILE (or stdin when omitted) and prints it rendered.";

/// How the rendered document is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    /// Bold and code styled with terminal escapes.
    Styled,
    /// Same layout without escapes (stdout is not a terminal).
    Plain,
    /// The block outline used by the snapshot tests.
    Tree,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    tree: bool,
    no_recover: bool,
    input: Option<PathBuf>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--tree" => parsed.tree = true,
            "--no-recover" => parsed.no_recover = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {flag}")),
            path => {
                if parsed.input.is_some() {
                    return Err(format!("Unexpected extra argument: {path}"));
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            if msg != USAGE {
                eprintln!("{USAGE}");
            }
            process::exit(if msg == USAGE { 0 } else { 2 });
        }
    };

    let config_path = Config::config_path();
    let mut config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Ignoring config file {}: {e}", config_path.display());
            Config::default()
        }
    };
    if args.no_recover {
        config.renderer.recover_missing_breaks = false;
    }

    let content = read_input(args.input.as_ref())?;
    let doc = Renderer::new(config.renderer).render(&content);
    log::debug!("Rendered {} block(s)", doc.blocks.len());

    let mode = if args.tree {
        OutputMode::Tree
    } else if io::stdout().is_terminal() {
        OutputMode::Styled
    } else {
        OutputMode::Plain
    };

    let mut stdout = io::stdout().lock();
    write_document(&mut stdout, &doc, mode)?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_document<W: Write>(out: &mut W, doc: &Document, mode: OutputMode) -> io::Result<()> {
    if mode == OutputMode::Tree {
        write!(out, "{}", snapshot::normalize(doc))?;
        return out.flush();
    }

    for (i, block) in doc.blocks.iter().enumerate() {
        if i > 0 {
            queue!(out, Print("\n"))?;
        }
        match block {
            Block::Paragraph { lines } => {
                for line in lines {
                    if let ParagraphLine::Text(content) = line {
                        write_inline(out, content, mode)?;
                    }
                    queue!(out, Print("\n"))?;
                }
            }
            Block::List { items } => {
                for item in items {
                    queue!(out, Print("  • "))?;
                    write_inline(out, item, mode)?;
                    queue!(out, Print("\n"))?;
                }
            }
        }
    }
    out.flush()
}

fn write_inline<W: Write>(
    out: &mut W,
    content: &InlineContent,
    mode: OutputMode,
) -> io::Result<()> {
    for node in content {
        match (node, mode) {
            (InlineNode::Bold(v), OutputMode::Styled) => {
                queue!(out, PrintStyledContent(v.as_str().bold()))?
            }
            (InlineNode::Code(v), OutputMode::Styled) => {
                queue!(out, PrintStyledContent(v.as_str().cyan()))?
            }
            (node, _) => queue!(out, Print(node.value()))?,
        }
    }
    Ok(())
}
