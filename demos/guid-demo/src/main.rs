//! Demonstration harness for the guid core.
//!
//! Generates and parses guids, prints them, and runs the self-checks.
//! Exits 0 when every check passed, 1 otherwise.

use xguid::{new_guid, Guid};

fn main() {
    let mut failed = 0usize;
    let mut check = |ok: bool, what: &str| {
        if !ok {
            println!("FAIL - {what}");
            failed += 1;
        }
    };

    // Fresh identifiers
    let r1 = new_guid();
    let r2 = new_guid();
    let r3 = new_guid();

    println!("{r1}");
    println!("{r2}");
    println!("{r3}");

    check(
        r1 != r2 && r1 != r3 && r2 != r3,
        "not all random guids are different",
    );

    // Parsing and rendering
    let s1 = Guid::parse("7bcd757f-5b10-4f9b-af69-1a1f226f3b3e");
    let s2 = Guid::parse("16d1bd03-09a5-47d3-944b-5e326fd52d27");
    let s3 = Guid::parse("fdaba646-e07e-49de-9529-4499a5580c75");
    let s4 = Guid::parse("7bcd757f-5b10-4f9b-af69-1a1f226f3b3e");

    check(s1 != s2, "s1 and s2 should be different");
    check(s1 == s4, "s1 and s4 should be equal");
    check(
        s1.to_string() == "7bcd757f-5b10-4f9b-af69-1a1f226f3b3e",
        "string from s1 is wrong",
    );
    check(
        s2.to_string() == "16d1bd03-09a5-47d3-944b-5e326fd52d27",
        "string from s2 is wrong",
    );
    check(
        s3.to_string() == "fdaba646-e07e-49de-9529-4499a5580c75",
        "string from s3 is wrong",
    );

    // Swap
    let mut swap1 = new_guid();
    let mut swap2 = new_guid();
    let swap3 = swap1;
    let swap4 = swap2;

    check(
        swap1 == swap3 && swap2 == swap4 && swap1 != swap2,
        "swap guids have bad initial state",
    );
    swap1.swap(&mut swap2);
    check(
        swap1 == swap4 && swap2 == swap3 && swap1 != swap2,
        "swap didn't swap",
    );

    // Error handling: everything malformed collapses to the sentinel
    let empty = Guid::default();

    let too_few = Guid::from_bytes(&[1, 2, 3, 4]);
    check(
        too_few == empty && !too_few.is_valid(),
        "guid created from too few bytes",
    );

    let bytes17: Vec<u8> = (1..=17).collect();
    let too_many = Guid::from_bytes(&bytes17);
    check(
        too_many == empty && !too_many.is_valid(),
        "guid created from too many bytes",
    );

    let one_short = Guid::parse("16d1bd03-09a5-47d3-944b-5e326fd52d2");
    check(
        one_short == empty && !one_short.is_valid(),
        "guid created from 35-char string",
    );

    let one_long = Guid::parse("16d1bd03-09a5-47d3-944b-5e326fd52d27a");
    check(
        one_long == empty && !one_long.is_valid(),
        "guid created from 37-char string",
    );

    let garbage = Guid::parse("!!bad-guid-string!!");
    check(
        garbage == empty && !garbage.is_valid(),
        "guid created from non-hex string",
    );

    if failed == 0 {
        println!("All checks passed!");
        std::process::exit(0);
    } else {
        println!("{failed} checks failed.");
        std::process::exit(1);
    }
}
