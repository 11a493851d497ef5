use std::fmt;

use crate::math::curve::curve::Curve;
use crate::math::curve::equation::format_polynomial;

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────────────────────────────────────
//
// 係數以高次在前儲存：[a_n, a_{n-1}, ..., a_1, a_0]
//   p(x) = a_n·x^n + ... + a_1·x + a_0
// 與 design matrix 的欄位順序一致，solver 解出的向量可直接使用。

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefs: Vec<f64>
}

impl Polynomial {
    /// 空係數視為常數 0
    pub fn new(coefs: Vec<f64>) -> Polynomial {
        let coefs = if coefs.is_empty() { vec![0.0] } else { coefs };
        Polynomial { coefs }
    }

    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    /// 次方為 `power` 的係數，超出範圍回傳 0
    pub fn coef_of_power(&self, power: usize) -> f64 {
        if power > self.degree() {
            0.0
        } else {
            self.coefs[self.degree() - power]
        }
    }

    pub fn equation(&self) -> String {
        format_polynomial(&self.coefs)
    }
}

impl Curve for Polynomial {
    /// Horner
    fn value(&self, x: f64) -> f64 {
        let mut result = self.coefs[0];
        for &beta in &self.coefs[1..] {
            result = f64::mul_add(result, x, beta);
        }
        result
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.equation())
    }
}
