//! Demo programs
//!
//! Fixed-output programs showing boolean/character representation,
//! integer literal bases, and stream formatting in several bases.

use anyhow::Result;
use clap::ValueEnum;

use numfmt_core::{Base, FormatOptions, NumberFormatter, Value};
use numfmt_sink::{emit, emit_labelled, OutputSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoProgram {
    /// Boolean and character representation
    Booleans,
    /// Integer literals written in different bases
    Literals,
    /// Decimal, hexadecimal and octal stream output
    Streams,
}

impl DemoProgram {
    pub const ALL: [DemoProgram; 3] = [DemoProgram::Booleans, DemoProgram::Literals, DemoProgram::Streams];

    pub fn run(self, sink: &mut dyn OutputSink) -> Result<()> {
        tracing::debug!(program = ?self, "running demo");
        match self {
            DemoProgram::Booleans => booleans(sink),
            DemoProgram::Literals => literals(sink),
            DemoProgram::Streams => streams(sink),
        }
    }
}

fn booleans(sink: &mut dyn OutputSink) -> Result<()> {
    let red_light = false;
    let number: i32 = 1;
    let value: u8 = 65;

    let decimal = FormatOptions::new();
    let words = decimal.boolean_as_word(true);

    if red_light {
        sink.write_line("Stop!")?;
    } else {
        sink.write_line("Go through!")?;
    }

    let light = NumberFormatter::format(red_light, &words)?;
    sink.write_line(&format!("sizeof(bool): {}", light.byte_width))?;
    emit_labelled(sink, "boolean value: ", &light)?;

    let ordinary = NumberFormatter::format(number, &decimal)?;
    emit_labelled(sink, "ordinary value: ", &ordinary)?;
    sink.write_line(&format!("sizeof(number){}", ordinary.byte_width))?;

    let (character, code_point) = NumberFormatter::format_with_code_point(value, &decimal)?;
    emit_labelled(sink, "value: ", &character)?;
    emit_labelled(sink, "value: ", &code_point)?;
    Ok(())
}

fn literals(sink: &mut dyn OutputSink) -> Result<()> {
    let decimal = FormatOptions::new();
    let literals: [(&str, i32); 4] = [
        ("decimal literal 15", 15),
        ("octal literal 0o17", 0o17),
        ("hexadecimal literal 0x0F", 0x0F),
        ("binary literal 0b0000_1111", 0b0000_1111),
    ];
    for (label, value) in literals {
        let out = NumberFormatter::format(value, &decimal)?;
        emit_labelled(sink, &format!("{}: ", label), &out)?;
    }
    Ok(())
}

fn streams(sink: &mut dyn OutputSink) -> Result<()> {
    let values = [Value::Int(707070), Value::Int(-47347)];
    let bases = [Base::Decimal, Base::Hexadecimal, Base::Octal];
    for value in values {
        for base in bases {
            let out = NumberFormatter::format(value, &FormatOptions::with_base(base))?;
            let label = format!("{} {}: ", NumberFormatter::format(value, &FormatOptions::new())?, base);
            emit_labelled(sink, &label, &out)?;
        }
    }

    let prefixed = FormatOptions::with_base(Base::Hexadecimal).base_prefix(true);
    emit(sink, &NumberFormatter::format(707070, &prefixed)?)?;
    emit(sink, &NumberFormatter::format(707070, &prefixed.base(Base::Octal))?)?;
    Ok(())
}
