pub mod baidu;
pub mod bilibili;
pub mod carhome;
pub mod cheshi;
pub mod csdn;
pub mod douban;
pub mod douyin;
pub mod dongchedi;
pub mod endata;
pub mod hellogithub;
pub mod ithome;
pub mod juejin;
pub mod kr36;
pub mod qctt;
pub mod qq;
pub mod thepaper;
pub mod toolify;
pub mod toutiao;
pub mod weibo;
pub mod wy163;
pub mod xiaohongshu;
pub mod zhihu;

use crate::hot::types::HotProvider;

/// Every built-in source, in catalogue order.
pub static ALL: &[&dyn HotProvider] = &[
    &bilibili::Bilibili,
    &weibo::Weibo,
    &douyin::Douyin,
    &toutiao::Toutiao,
    &douban::Douban,
    &thepaper::Thepaper,
    &xiaohongshu::Xiaohongshu,
    &wy163::Wy163,
    &qq::Qq,
    &baidu::Baidu,
    &zhihu::Zhihu,
    &zhihu::ZhihuHtml,
    &kr36::Kr36,
    &csdn::Csdn::OVERALL,
    &csdn::Csdn::AI,
    &hellogithub::HelloGithub,
    &ithome::Ithome,
    &juejin::Juejin::BACKEND,
    &juejin::Juejin::AI,
    &carhome::Carhome,
    &dongchedi::Dongchedi,
    &cheshi::Cheshi,
    &qctt::Qctt,
    &endata::Endata,
    &toolify::Toolify,
];

/// Look a provider up by its route slug.
pub fn find(id: &str) -> Option<&'static dyn HotProvider> {
    ALL.iter().copied().find(|p| p.id() == id)
}
