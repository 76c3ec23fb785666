// src/scalar/debug.rs
use crate::scalar::Scalar;
use crate::types::Operation;
use std::fmt::{self, Write};

impl Scalar {
    /// Renders a multi-line summary of the node and its immediate operands.
    pub fn dump(&self) -> String {
        let (label, value, requires_grad, grad, operation, operands) = {
            let guard = self.read_data();
            (
                guard.label.clone(),
                guard.value,
                guard.requires_grad,
                guard.grad,
                guard.operation,
                guard.operands.clone(),
            )
        };

        let mut out = String::from("Scalar\n");
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{:3}label         : {}", "", label.as_deref().unwrap_or("None"));
        let _ = writeln!(out, "{:3}data          : {:.6}", "", value);
        let _ = writeln!(out, "{:3}requires_grad : {}", "", requires_grad);
        let _ = writeln!(out, "{:3}grad          : {:.6}", "", grad);
        let _ = writeln!(out, "{:3}op            : {}", "", operation);
        if operands.is_empty() {
            let _ = write!(out, "{:3}prev          : None", "");
        } else {
            let _ = write!(out, "{:3}prev          : ", "");
            for operand in &operands {
                let _ = write!(out, "\n{:6}{}", "", operand);
            }
        }
        out
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Scalar(")?;
        if let Some(label) = &guard.label {
            write!(f, "label={}, ", label)?;
        }
        write!(f, "data={:.6}", guard.value)?;
        if guard.requires_grad {
            write!(f, ", requires_grad=true, grad={:.6}", guard.grad)?;
        }
        if guard.operation != Operation::None {
            write!(f, ", op={}, prev={}", guard.operation, guard.operands.len())?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Scalar {
    /// `{:?}` prints the one-line summary, `{:#?}` the multi-line dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.dump())
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}
