//! 链表错误码定义

/// 链表操作错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ListError {
    /// 传入的节点指针为空
    PtrNull,
    /// 节点未初始化（不处于自环状态）
    NotInited,
}

/// 链表操作结果
pub type ListResult<T> = Result<T, ListError>;

impl From<ListError> for u32 {
    fn from(err: ListError) -> u32 {
        match err {
            ListError::PtrNull => ERRNO_LIST_PTR_NULL,
            ListError::NotInited => ERRNO_LIST_NOT_INITED,
        }
    }
}

impl TryFrom<u32> for ListError {
    type Error = ();

    fn try_from(errno: u32) -> Result<Self, Self::Error> {
        match errno {
            ERRNO_LIST_PTR_NULL => Ok(ListError::PtrNull),
            ERRNO_LIST_NOT_INITED => Ok(ListError::NotInited),
            _ => Err(()),
        }
    }
}

const ERRNO_LIST_PTR_NULL: u32 = 0x02001f01;
const ERRNO_LIST_NOT_INITED: u32 = 0x02001f02;

impl core::fmt::Display for ListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let desc = match self {
            Self::PtrNull => "Node pointer is null",
            Self::NotInited => "Node is not initialized",
        };
        write!(f, "{}", desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn errno_round_trip() {
        assert_eq!(u32::from(ListError::PtrNull), 0x02001f01);
        assert_eq!(u32::from(ListError::NotInited), 0x02001f02);
        assert_eq!(ListError::try_from(0x02001f01), Ok(ListError::PtrNull));
        assert_eq!(ListError::try_from(0x02001f02), Ok(ListError::NotInited));
        assert!(ListError::try_from(0).is_err());
        assert!(ListError::try_from(0x02001d01).is_err());
    }

    #[test]
    fn display_strings() {
        assert_eq!(format!("{}", ListError::PtrNull), "Node pointer is null");
        assert_eq!(
            format!("{}", ListError::NotInited),
            "Node is not initialized"
        );
    }
}
