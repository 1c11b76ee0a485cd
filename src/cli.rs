// Interactive teller menu
//
// Thin text wrapper over the Bank registry: prompt, parse, delegate,
// report. All domain rules live in account.rs / bank.rs; this module only
// turns results into console lines. Generic over reader/writer so tests
// can script a whole session.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::bank::Bank;

const DIVIDER: &str = "------------------------";

/// Run the menu loop until the operator exits (or input ends).
pub fn run<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        print_menu(out)?;
        let choice = match read_line(input)? {
            Some(line) => line,
            // Input closed at the menu: treat like exit.
            None => break,
        };

        match choice.as_str() {
            "1" => create(bank, input, out)?,
            "2" => deposit(bank, input, out)?,
            "3" => withdraw(bank, input, out)?,
            "4" => interest(bank, input, out)?,
            "5" => show(bank, input, out)?,
            "6" => show_all(bank, out)?,
            "7" => {
                writeln!(out, "Exiting...")?;
                break;
            }
            _ => writeln!(out, "✗ Invalid option!")?,
        }
    }

    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "1. Create")?;
    writeln!(out, "2. Deposit")?;
    writeln!(out, "3. Withdraw")?;
    writeln!(out, "4. Interest")?;
    writeln!(out, "5. Show")?;
    writeln!(out, "6. Show All")?;
    writeln!(out, "7. Exit")?;
    write!(out, "Choice: ")?;
    out.flush()?;
    Ok(())
}

// ============================================================================
// MENU ACTIONS
// ============================================================================

fn create<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let name = prompt(input, out, "Name: ")?;
    let type_label = prompt(input, out, "Type (Savings/FDR/DPS): ")?;
    let amount = prompt_amount(input, out, "Deposit: $")?;

    // Savings has no term; everything else is asked for one, even a label
    // the registry is about to reject.
    let term = if type_label == "Savings" {
        0
    } else {
        prompt_term(input, out, "Term: ")?
    };

    match bank.create(&name, amount, &type_label, term) {
        Ok(account) => {
            writeln!(out, "✓ Account created:")?;
            writeln!(out, "{}", account)?;
        }
        Err(err) => writeln!(out, "✗ {}", err)?,
    }
    Ok(())
}

fn deposit<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let number = prompt(input, out, "Account Number: ")?;
    let amount = prompt_amount(input, out, "Amount: $")?;

    match bank.deposit(&number, amount) {
        Ok(balance) => writeln!(out, "✓ Deposited ${:.2}. New balance: ${:.2}", amount, balance)?,
        Err(err) => writeln!(out, "✗ {}", err)?,
    }
    Ok(())
}

fn withdraw<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let number = prompt(input, out, "Account Number: ")?;
    let amount = prompt_amount(input, out, "Amount: $")?;

    match bank.withdraw(&number, amount) {
        Ok(balance) => writeln!(out, "✓ Withdrew ${:.2}. Remaining: ${:.2}", amount, balance)?,
        Err(err) => writeln!(out, "✗ {}", err)?,
    }
    Ok(())
}

fn interest<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let number = prompt(input, out, "Account Number: ")?;

    match bank.post_interest(&number) {
        Ok(posting) => writeln!(
            out,
            "✓ Interest added: ${:.2}. Total: ${:.2}",
            posting.interest, posting.balance
        )?,
        Err(err) => writeln!(out, "✗ {}", err)?,
    }
    Ok(())
}

fn show<R: BufRead, W: Write>(bank: &Bank, input: &mut R, out: &mut W) -> Result<()> {
    let number = prompt(input, out, "Account Number: ")?;

    match bank.account(&number) {
        Some(account) => writeln!(out, "{}", account)?,
        None => writeln!(out, "✗ Account not found: {}", number)?,
    }
    Ok(())
}

fn show_all<W: Write>(bank: &Bank, out: &mut W) -> Result<()> {
    if bank.is_empty() {
        writeln!(out, "No accounts to display!")?;
        return Ok(());
    }

    for account in bank.accounts() {
        writeln!(out, "{}", account)?;
        writeln!(out, "{}", DIVIDER)?;
    }
    Ok(())
}

// ============================================================================
// INPUT HELPERS
// ============================================================================

/// Read one line, trimmed. `None` means the input has ended.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("failed to read input")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print a label and read the answer. Input ending mid-prompt is an error;
/// the menu loop is the only place EOF means a clean exit.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    match read_line(input)? {
        Some(line) => Ok(line),
        None => bail!("input ended in the middle of a prompt"),
    }
}

/// Prompt for a currency amount, re-asking until a finite number is given.
fn prompt_amount<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<f64> {
    loop {
        let text = prompt(input, out, label)?;
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(value),
            _ => writeln!(out, "✗ Please enter a number.")?,
        }
    }
}

/// Prompt for a term, re-asking until a whole number is given.
fn prompt_term<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<u32> {
    loop {
        let text = prompt(input, out, label)?;
        match text.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "✗ Please enter a whole number.")?,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a scripted session and return everything written to the output.
    fn run_session(script: &str) -> String {
        let mut bank = Bank::new();
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        run(&mut bank, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let out = run_session("7\n");
        assert!(out.contains("Choice: "));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_eof_at_menu_exits_cleanly() {
        let out = run_session("");
        assert!(out.contains("Choice: "));
        assert!(!out.contains("Invalid option"));
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let out = run_session("9\n7\n");
        assert!(out.contains("✗ Invalid option!"));
        // Menu printed twice: once before the bad choice, once after
        assert_eq!(out.matches("1. Create").count(), 2);
    }

    #[test]
    fn test_create_savings_session() {
        let out = run_session("1\nAlice\nSavings\n1000\n7\n");

        assert!(out.contains("Name: "));
        assert!(out.contains("Type (Savings/FDR/DPS): "));
        assert!(out.contains("Deposit: $"));
        // Savings never asks for a term
        assert!(!out.contains("Term: "));
        assert!(out.contains("✓ Account created:"));
        assert!(out.contains("Account Number: ACCT1001"));
        assert!(out.contains("Balance: $1000.00"));
    }

    #[test]
    fn test_create_fdr_asks_for_term() {
        let out = run_session("1\nBob\nFDR\n5000\n12\n7\n");

        assert!(out.contains("Term: "));
        assert!(out.contains("Type: FDR"));
        assert!(out.contains("Term: 12 months"));
    }

    #[test]
    fn test_create_invalid_type_reports_error() {
        // An unknown label is still asked for a term, then rejected.
        let out = run_session("1\nEve\nChecking\n100\n6\n7\n");

        assert!(out.contains("✗ Invalid account type: Checking"));
        assert!(!out.contains("✓ Account created:"));
    }

    #[test]
    fn test_deposit_and_withdraw_session() {
        let script = "1\nAlice\nSavings\n1000\n\
                      2\nACCT1001\n500\n\
                      3\nACCT1001\n2000\n\
                      7\n";
        let out = run_session(script);

        assert!(out.contains("✓ Deposited $500.00. New balance: $1500.00"));
        assert!(out.contains("✗ Insufficient funds: requested $2000.00, available $1500.00"));
    }

    #[test]
    fn test_interest_session() {
        let script = "1\nAlice\nSavings\n1000\n\
                      2\nACCT1001\n500\n\
                      4\nACCT1001\n\
                      7\n";
        let out = run_session(script);

        assert!(out.contains("✓ Interest added: $67.50. Total: $1567.50"));
    }

    #[test]
    fn test_operations_on_unknown_account() {
        let script = "2\nACCT9999\n100\n\
                      4\nACCT9999\n\
                      5\nACCT9999\n\
                      7\n";
        let out = run_session(script);

        assert_eq!(out.matches("Account not found: ACCT9999").count(), 3);
    }

    #[test]
    fn test_show_all_empty_and_populated() {
        let empty = run_session("6\n7\n");
        assert!(empty.contains("No accounts to display!"));

        let script = "1\nAlice\nSavings\n1000\n\
                      1\nBob\nDPS\n800\n3\n\
                      6\n7\n";
        let populated = run_session(script);
        assert!(populated.contains(DIVIDER));
        let alice = populated.find("Account Number: ACCT1001");
        let bob = populated.find("Account Number: ACCT1002");
        assert!(alice.is_some() && bob.is_some());
    }

    #[test]
    fn test_malformed_amount_reprompts() {
        let script = "1\nAlice\nSavings\nabc\n1000\n7\n";
        let out = run_session(script);

        assert!(out.contains("✗ Please enter a number."));
        assert!(out.contains("✓ Account created:"));
        assert!(out.contains("Balance: $1000.00"));
    }

    #[test]
    fn test_malformed_term_reprompts() {
        let script = "1\nBob\nFDR\n5000\nsoon\n12\n7\n";
        let out = run_session(script);

        assert!(out.contains("✗ Please enter a whole number."));
        assert!(out.contains("Term: 12 months"));
    }

    #[test]
    fn test_eof_mid_prompt_is_an_error() {
        let mut bank = Bank::new();
        let mut input = Cursor::new("1\nAlice\n".to_string());
        let mut out = Vec::new();

        let result = run(&mut bank, &mut input, &mut out);
        assert!(result.is_err());
    }
}
