//! Диагностический вывод списка по уровням.
//!
//! Формат не стабилен и предназначен только для отладки.

use std::fmt::Debug;

use super::{node::Position, SkipList};

impl<T: Debug, R> SkipList<T, R> {
    /// Рисует каждый активный уровень сверху вниз: узлы, тильды по числу
    /// перекрываемых шагов уровня 0 и завершающий `--> nil`.
    ///
    /// ```text
    /// lv1 : H  ~  1  ~     ~  6  ~  --> nil
    /// lv0 : H  ~  1  ~  4  ~  6  ~  --> nil
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();

        for l in (0..self.level).rev() {
            out.push_str(&format!("lv{l:<2}{:<2}", ":"));

            let mut pos = Position::Head;

            loop {
                let label = match pos {
                    Position::Head => "H".to_string(),
                    Position::Node(id) => format!("{:?}", self.arena[id].value),
                };
                out.push_str(&format!("{label:<3}"));

                let entry = self.entry(pos, l);

                for i in 0..entry.span {
                    if i == 0 {
                        out.push_str(&format!("{:<3}", "~"));
                    } else {
                        out.push_str(&format!("{:<3}{:<3}", "", "~"));
                    }
                }

                match entry.forward {
                    Some(next) => pos = Position::Node(next),
                    None => {
                        if entry.span != 0 {
                            out.push_str(&format!("{:<3}", ""));
                        }
                        break;
                    }
                }
            }

            out.push_str("--> nil\n");
        }

        out
    }
}
