use std::fmt::Write;

/// 將係數（高次在前）轉為 "y = ..." 字串。
///
/// 規則：
///   - 係數恰為 0 的項整項略過
///   - 每個係數固定兩位小數，負號照常輸出，前面不加 "+ "
///   - 正係數且前面已有非零項時，先輸出 "+ "
///   - 次方 >= 2 輸出 "x^p "，一次項輸出 "x "，常數項不加後綴
///   - 全部為 0 時輸出 "y = 0"
pub fn format_polynomial(coefs: &[f64]) -> String {
    let mut equation = String::from("y = ");
    let degree = coefs.len().saturating_sub(1);
    let mut has_leading_term = false;

    for (i, &coef) in coefs.iter().enumerate() {
        if coef == 0.0 {
            continue;
        }

        if coef > 0.0 && has_leading_term {
            equation.push_str("+ ");
        }

        let _ = write!(equation, "{:.2}", coef);
        match degree - i {
            0 => {},
            1 => equation.push_str("x "),
            power => {
                let _ = write!(equation, "x^{} ", power);
            }
        }
        has_leading_term = true;
    }

    if !has_leading_term {
        equation.push('0');
    }

    equation
}
