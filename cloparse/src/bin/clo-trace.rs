// Test runner: walks a token list with CloParser and prints every decision.
//
//   clo-trace SPEC... -- TOKEN...
//
// SPEC is KIND:ALIASES, KIND one of flag, text, int, uint, float; a trailing
// `?` on KIND makes the value optional (e.g. `uint?:-O`).

use cloparse::*;

enum Slot {
    Flag,
    Text(String),
    Int(i64),
    Uint(u64),
    Float(f64),
}

struct Spec {
    aliases: String,
    optional: bool,
    slot: Slot,
}

fn parse_spec(s: &str) -> std::result::Result<Spec, String> {
    let (kind, aliases) = s
        .split_once(':')
        .ok_or_else(|| format!("bad spec '{}': expected KIND:ALIASES", s))?;
    let (kind, optional) = match kind.strip_suffix('?') {
        Some(k) => (k, true),
        None => (kind, false),
    };
    let slot = match kind {
        "flag" => Slot::Flag,
        "text" => Slot::Text(String::new()),
        "int" => Slot::Int(0),
        "uint" => Slot::Uint(0),
        "float" => Slot::Float(0.0),
        _ => return Err(format!("bad spec '{}': unknown kind '{}'", s, kind)),
    };
    Ok(Spec {
        aliases: aliases.to_string(),
        optional,
        slot,
    })
}

fn try_spec(cop: &mut CloParser<'_>, spec: &mut Spec) -> Option<String> {
    let names = spec.aliases.as_str();
    let optional = spec.optional;
    let matched = match &mut spec.slot {
        Slot::Flag => cop.get(names),
        Slot::Text(v) => cop.get_value(names, v, optional),
        Slot::Int(v) => cop.get_value(names, v, optional),
        Slot::Uint(v) => cop.get_value(names, v, optional),
        Slot::Float(v) => cop.get_value(names, v, optional),
    };
    if !matched {
        return None;
    }
    Some(match &spec.slot {
        Slot::Flag => "flag".to_string(),
        Slot::Text(v) => format!("text = '{}'", v),
        Slot::Int(v) => format!("int = {}", v),
        Slot::Uint(v) => format!("uint = {}", v),
        Slot::Float(v) => format!("float = {}", v),
    })
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(sep) = args.iter().position(|a| a == "--") else {
        eprintln!("usage: clo-trace SPEC... -- TOKEN...");
        std::process::exit(2);
    };

    let mut specs = Vec::new();
    for s in &args[..sep] {
        match parse_spec(s) {
            Ok(spec) => specs.push(spec),
            Err(e) => {
                eprintln!("clo-trace: {}", e);
                std::process::exit(2);
            }
        }
    }
    let tokens = &args[sep + 1..];

    let mut i = 0;
    while i < tokens.len() {
        let mut cop = CloParser::new(&mut i, tokens);
        let start = cop.position();
        let token = cop.current().unwrap_or_default();
        let mut line = None;
        for spec in specs.iter_mut() {
            if let Some(what) = try_spec(&mut cop, spec) {
                line = Some(format!("'{}' {}", spec.aliases, what));
                break;
            }
        }
        match line {
            Some(l) => println!("{} {}: {} -> {}", start, token, l, cop.position()),
            None => println!("{} {}: positional", start, token),
        }
        cop.advance();
    }
    println!("end {}", i);
}
