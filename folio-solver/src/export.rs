use folio_core::models::AllocationConstraint;
use std::io::Write;

// Asset labels are free-form, so the program refers to variables by position
// (`x_0`, `x_1`, ...) and the labels only ever appear in comments.

/// Write the allocation program in `.mps` format.
pub fn export_mps(
    constraints: &[AllocationConstraint],
    buffer: &mut impl Write,
) -> Result<(), std::io::Error> {
    // MPS is a somewhat archaic format, but is easy enough to generate.
    // https://www.ibm.com/docs/en/icos/22.1.2?topic=standard-records-in-mps-format
    // is a good reference.

    writeln!(buffer, "NAME folio_allocation")?;
    writeln!(buffer, "ROWS")?;

    // MPS defaults to minimization, so the objective is the negated return
    writeln!(buffer, " N    loss")?;

    // The budget row
    writeln!(buffer, " E    total")?;

    // Then a lower and upper row per asset
    for idx in 0..constraints.len() {
        writeln!(buffer, " G    min_{idx}")?;
        writeln!(buffer, " L    max_{idx}")?;
    }

    writeln!(buffer, "COLUMNS")?;
    for (idx, constraint) in constraints.iter().enumerate() {
        writeln!(
            buffer,
            "    x_{idx}    loss    {term}",
            term = -constraint.expected_return()
        )?;
        writeln!(buffer, "    x_{idx}    total    1")?;
        writeln!(buffer, "    x_{idx}    min_{idx}    1")?;
        writeln!(buffer, "    x_{idx}    max_{idx}    1")?;
    }

    writeln!(buffer, "RHS")?;
    writeln!(buffer, "    rhs    total    1")?;
    for (idx, constraint) in constraints.iter().enumerate() {
        let (minimum, maximum) = constraint.bounds();
        writeln!(buffer, "    rhs    min_{idx}    {minimum}")?;
        writeln!(buffer, "    rhs    max_{idx}    {maximum}")?;
    }

    // The default MPS bounds are [0, +inf), which is exactly x >= 0, so
    // there is no BOUNDS section.

    writeln!(buffer, "ENDATA")?;
    Ok(())
}

/// Write the allocation program in CPLEX `.lp` format.
pub fn export_lp(
    constraints: &[AllocationConstraint],
    buffer: &mut impl Write,
) -> Result<(), std::io::Error> {
    writeln!(buffer, "\\ folio allocation")?;
    for (idx, constraint) in constraints.iter().enumerate() {
        // A line break in a label would end the comment early
        let label = constraint.asset().replace(char::is_control, " ");
        writeln!(buffer, "\\ x_{idx}: {label}")?;
    }

    writeln!(buffer, "Maximize")?;
    write!(buffer, " return:")?;
    for (idx, constraint) in constraints.iter().enumerate() {
        let r = constraint.expected_return();
        let sign = if r < 0.0 { '-' } else { '+' };
        write!(buffer, " {sign} {} x_{idx}", r.abs())?;
    }
    writeln!(buffer)?;

    writeln!(buffer, "Subject To")?;
    write!(buffer, " total:")?;
    for idx in 0..constraints.len() {
        write!(buffer, " + x_{idx}")?;
    }
    writeln!(buffer, " = 1")?;

    for (idx, constraint) in constraints.iter().enumerate() {
        let (minimum, maximum) = constraint.bounds();
        writeln!(buffer, " min_{idx}: x_{idx} >= {minimum}")?;
        writeln!(buffer, " max_{idx}: x_{idx} <= {maximum}")?;
    }

    writeln!(buffer, "Bounds")?;
    for idx in 0..constraints.len() {
        writeln!(buffer, " x_{idx} >= 0")?;
    }

    writeln!(buffer, "End")?;
    Ok(())
}
