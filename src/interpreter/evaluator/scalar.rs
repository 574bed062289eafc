use crate::interpreter::token::Operator;

impl Operator {
    /// Applies the operator to two values.
    ///
    /// Plain `f64` arithmetic: dividing by zero gives `inf`, `-inf` or `NaN`
    /// rather than an error.
    ///
    /// # Parameters
    /// - `left`: The running total.
    /// - `right`: The operand being folded in.
    ///
    /// # Example
    /// ```
    /// use mate::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::Minus.apply(48.0, 42.0), 6.0);
    /// assert_eq!(Operator::Divide.apply(11.0, 2.0), 5.5);
    /// assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Times => left * right,
            Self::Divide => left / right,
        }
    }
}
