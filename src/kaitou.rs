use crate::basis::{Operation, Rot};

const NEW_LINE: &str = "\n";

pub fn ans(ope: &[Operation], rot: &[Rot]) -> String {
    let mut result = String::new();

    //回転情報
    for i in rot {
        result += &i.as_num().to_string();
    }
    result += NEW_LINE;

    //選択回数
    result += &ope.len().to_string();
    result += NEW_LINE;

    for i in ope {
        //選択画像位置
        result += &format!("{:X}{:X}", i.select.x(), i.select.y());
        result += NEW_LINE;

        //交換回数
        result += &i.movements.len().to_string();
        result += NEW_LINE;

        //交換操作
        result.extend(i.movements.iter().map(|m| m.as_char()));
        result += NEW_LINE;
    }

    result
}

#[test]
fn case1() {
    use crate::basis::{Movement, Pos};

    let expected = "01230320111103230210\n1\nA1\n4\nUDLR\n".to_owned();
    let actual = ans(
        &[Operation {
            select: Pos::new(10, 1),
            movements: vec![
                Movement::Up,
                Movement::Down,
                Movement::Left,
                Movement::Right,
            ],
        }],
        &[
            Rot::R0,
            Rot::R90,
            Rot::R180,
            Rot::R270,
            Rot::R0,
            Rot::R270,
            Rot::R180,
            Rot::R0,
            Rot::R90,
            Rot::R90,
            Rot::R90,
            Rot::R90,
            Rot::R0,
            Rot::R270,
            Rot::R180,
            Rot::R270,
            Rot::R0,
            Rot::R180,
            Rot::R90,
            Rot::R0,
        ],
    );

    assert_eq!(expected, actual);
}

#[test]
fn no_operations() {
    assert_eq!(ans(&[], &[Rot::R0, Rot::R90]), "01\n0\n");
}
