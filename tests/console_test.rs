use anyhow::Result;
use linelog::{log, CaptureSink, Console, DisplayList};

#[test]
fn test_empty_call_emits_bare_line() -> Result<()> {
    let console = Console::new(CaptureSink::new());
    console.try_log_args(&[])?;

    assert_eq!(console.sink().lines()?, vec![String::new()]);
    Ok(())
}

#[test]
fn test_single_value() -> Result<()> {
    let console = Console::new(CaptureSink::new());
    console.try_log_args(&[&"a"])?;

    assert_eq!(console.sink().lines()?, vec!["a"]);
    Ok(())
}

#[test]
fn test_values_joined_with_single_spaces() -> Result<()> {
    let console = Console::new(CaptureSink::new());
    console.try_log_args(&[&"a", &"b", &"c"])?;

    assert_eq!(console.sink().lines()?, vec!["a b c"]);
    Ok(())
}

#[test]
fn test_heterogeneous_values_via_macro() -> Result<()> {
    let console = Console::new(CaptureSink::new());
    log!(console, 1, true, "x");

    assert_eq!(console.sink().lines()?, vec!["1 true x"]);
    Ok(())
}

#[test]
fn test_macro_with_no_values() -> Result<()> {
    let console = Console::new(CaptureSink::new());
    log!(console);

    assert_eq!(console.sink().lines()?, vec![String::new()]);
    Ok(())
}

#[test]
fn test_sequential_calls_emit_independent_lines() -> Result<()> {
    let console = Console::new(CaptureSink::new());
    log!(console, "first");
    log!(console, "second", 2);

    assert_eq!(console.sink().lines()?, vec!["first", "second 2"]);
    Ok(())
}

#[test]
fn test_homogeneous_sequence_convenience() -> Result<()> {
    let console = Console::new(CaptureSink::new());
    console.log(vec![1, 2, 3]);

    assert_eq!(console.sink().lines()?, vec!["1 2 3"]);
    Ok(())
}

#[test]
fn test_list_values_render_bracketed() -> Result<()> {
    let console = Console::new(CaptureSink::new());
    log!(console, "items:", DisplayList(&[1, 2, 3]));

    assert_eq!(console.sink().lines()?, vec!["items: [1, 2, 3]"]);
    Ok(())
}
