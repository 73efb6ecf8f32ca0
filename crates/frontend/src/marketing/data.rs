//! Static copy of the marketing pages.

pub const SITE_NAME: &str = "四季守";

pub struct Company {
    pub name: &'static str,
    pub representative: &'static str,
    pub postal_code: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
}

pub const COMPANY: Company = Company {
    name: "株式会社シキモリ",
    representative: "代表取締役 山田 太郎",
    postal_code: "〒100-0001",
    address: "東京都千代田区千代田1-1-1",
    phone: "03-1234-5678",
    email: "shikimori@gmail.jp",
    hours: "平日9:00〜18:00（土日祝日・年末年始を除く）",
};

/// External form service that receives the contact form
pub const CONTACT_FORM_ACTION: &str = "https://ssgform.com/s/uV0iqmPuFyP0";

pub struct ServiceHighlight {
    pub title: &'static str,
    pub summary: &'static str,
    pub period: &'static str,
    pub price: &'static str,
    pub status: &'static str,
    pub is_open: bool,
}

pub const HERO_SERVICES: &[ServiceHighlight] = &[
    ServiceHighlight {
        title: "ローダー除雪とダンプ排雪サービス",
        summary: "四季守では、秋田県内の、ローダー除雪、排雪の予約ができます。",
        period: "実施期間：2024年10月1日〜2025年03月31日",
        price: "料金：¥50,000〜/hour（要お見積り）",
        status: "募集：受付中",
        is_open: true,
    },
    ServiceHighlight {
        title: "重機での草刈り",
        summary: "四季守では、秋田県内の、重機での草刈りの予約ができます。",
        period: "実施期間：2025年4月1日〜2025年10月31日",
        price: "料金：¥50,000〜/hour（要お見積り）",
        status: "募集：2025年3月から予約受け付け予定",
        is_open: false,
    },
];

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "法人顧客向け",
        description: "法人顧客向けの専門的な管理・コンサルティングサービス",
    },
    Feature {
        title: "大規模施設向け",
        description: "大規模施設の管理に特化",
    },
    Feature {
        title: "環境保全",
        description: "環境保全に配慮した庭園管理とエコフレンドリーな手法の導入",
    },
    Feature {
        title: "エコフレンドリー",
        description: "自然志向の顧客ニーズに対応したサービス展開",
    },
    Feature {
        title: "個人宅向け",
        description: "個人宅向けの定期的な管理サービスと生活支援サービスとの連携",
    },
    Feature {
        title: "会員制サービス",
        description: "会員制サービスによる継続的な顧客関係の構築",
    },
    Feature {
        title: "季節に応じたケア",
        description: "季節に応じた細やかなケアと暮らしのトータルサポート",
    },
];

pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const PROCEDURE: &[Step] = &[
    Step {
        title: "サービスを選ぶ",
        detail: "まず、雪かき（冬期間）か草刈り（夏期間）のどちらをお願いしたいか選びます。",
    },
    Step {
        title: "ユーザー登録",
        detail: "初めのみお名前や住所、作業場所などを登録します。",
    },
    Step {
        title: "注文と支払い",
        detail: "作業してほしい日時を選び、料金を支払います。現在はクレジットカードのみです。",
    },
    Step {
        title: "サービス当日",
        detail: "予約した日時に、専門の業者がお伺いして作業します。",
    },
    Step {
        title: "完了",
        detail: "作業が終わったら、確認をして完了となります。",
    },
];

pub const PROCEDURE_POINTS: &[&str] = &[
    "登録や注文は、スマホやパソコンから簡単にできます。",
    "わからないことがあれば、いつでも質問できます。",
];

pub const PROCEDURE_NOTES: &[&str] = &[
    "料金は、予約日によって変わる場合があります。",
    "予約が込み合っている場合は、希望の日時に予約できないことがあります。",
];

pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub image_src: &'static str,
    pub date: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "snow-removal",
        title: "除雪",
        image_src: "/images/snow-removal.jpg",
        date: "2023/03/02",
    },
    Achievement {
        id: "grass-cutting",
        title: "草刈り",
        image_src: "/images/grass-cutting.jpg",
        date: "2024/08/02",
    },
];

pub struct Testimonial {
    pub headline: &'static str,
    pub body: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        headline: "丁寧な仕事",
        body: "定期的な駐車場除雪と、施設内除草をお願いしています。時間通りに丁寧な仕事に感謝しております。",
        author: "株式会社雪草 秋田営業所 所長 山田 花子",
    },
    Testimonial {
        headline: "早朝でも安心",
        body: "大雪の翌朝でも出勤前に駐車場が使えるようになっていて助かりました。",
        author: "秋田市 個人宅 佐藤 様",
    },
    Testimonial {
        headline: "見積もりが明確",
        body: "作業前に料金の説明があり、追加料金もなく安心してお願いできました。",
        author: "横手市 店舗オーナー 高橋 様",
    },
];

/// One titled block of a legal page
pub struct DocSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

pub const PRIVACY_ENACTED: &str = "制定日：2025年2月20日";

pub const PRIVACY_POLICY: &[DocSection] = &[
    DocSection {
        heading: "1. 個人情報の取得について",
        paragraphs: &["当社は、サービスの提供にあたり、以下の個人情報を取得いたします："],
        bullets: &["氏名", "メールアドレス", "電話番号", "住所", "写真データ"],
    },
    DocSection {
        heading: "2. 個人情報の利用目的",
        paragraphs: &["取得した個人情報は、以下の目的で利用いたします："],
        bullets: &[
            "サービスの提供および運営",
            "ご本人確認",
            "お問い合わせへの対応",
            "サービスの品質向上",
            "重要なお知らせの送信",
        ],
    },
    DocSection {
        heading: "3. 個人情報の管理",
        paragraphs: &["当社は、お客様の個人情報を適切に管理し、以下を徹底します："],
        bullets: &[
            "個人情報への不正アクセス防止のための措置",
            "個人情報の紛失、破壊、改ざん防止のための措置",
            "その他の安全管理措置",
        ],
    },
    DocSection {
        heading: "4. 個人情報の第三者提供",
        paragraphs: &["当社は、以下の場合を除き、お客様の個人情報を第三者に提供いたしません："],
        bullets: &[
            "お客様の同意がある場合",
            "法令に基づく場合",
            "人の生命、身体または財産の保護のために必要な場合",
        ],
    },
    DocSection {
        heading: "5. 個人情報の開示・訂正・削除",
        paragraphs: &["お客様は、当社が保有する個人情報について、開示、訂正、削除を請求することができます。その場合は、当社所定の方法にてご連絡ください。"],
        bullets: &[],
    },
    DocSection {
        heading: "6. お問い合わせ窓口",
        paragraphs: &[
            "個人情報の取扱いに関するお問い合わせは、以下の窓口までご連絡ください：",
            "メールアドレス：shikimori@gmail.jp",
            "受付時間：平日9:00〜18:00（土日祝日・年末年始を除く）",
        ],
        bullets: &[],
    },
    DocSection {
        heading: "7. プライバシーポリシーの変更",
        paragraphs: &["当社は、必要に応じて本プライバシーポリシーを変更することがあります。変更した場合は、当ウェブサイトでお知らせいたします。"],
        bullets: &[],
    },
];

pub const LEGAL_NOTICE: &[DocSection] = &[
    DocSection {
        heading: "事業者の名称",
        paragraphs: &["株式会社シキモリ"],
        bullets: &[],
    },
    DocSection {
        heading: "代表者名",
        paragraphs: &["代表取締役 山田 太郎"],
        bullets: &[],
    },
    DocSection {
        heading: "所在地",
        paragraphs: &["〒100-0001", "東京都千代田区千代田1-1-1"],
        bullets: &[],
    },
    DocSection {
        heading: "お問い合わせ先",
        paragraphs: &[
            "電話番号：03-1234-5678",
            "メールアドレス：shikimori@gmail.jp",
            "受付時間：平日9:00〜18:00（土日祝日・年末年始を除く）",
        ],
        bullets: &[],
    },
    DocSection {
        heading: "提供するサービス",
        paragraphs: &[],
        bullets: &["除雪サービス", "除草サービス"],
    },
    DocSection {
        heading: "料金",
        paragraphs: &[
            "除雪サービス：基本料金 5,000円（税込）/ 1時間、深夜料金（22:00〜5:00）7,500円（税込）/ 1時間",
            "除草サービス：基本料金 4,000円（税込）/ 1時間",
            "※面積や状況により料金が変動する場合がございます。",
        ],
        bullets: &[],
    },
    DocSection {
        heading: "支払方法",
        paragraphs: &["※銀行振込の場合、振込手数料はお客様負担となります。"],
        bullets: &[
            "クレジットカード決済（VISA, MasterCard, JCB, American Express）",
            "銀行振込",
            "現金払い",
        ],
    },
    DocSection {
        heading: "サービス提供時期",
        paragraphs: &[],
        bullets: &[
            "除雪：原則として、降雪後24時間以内に作業を開始",
            "除雪：緊急対応は別途料金にて24時間受付",
            "除草：ご予約日の指定時間に作業を実施",
            "除草：荒天時は、お客様と相談の上で日程を変更",
        ],
    },
    DocSection {
        heading: "キャンセルポリシー",
        paragraphs: &[],
        bullets: &[
            "前日までのキャンセル：無料",
            "当日キャンセル：料金の50%",
            "作業開始後のキャンセル：料金の100%",
        ],
    },
    DocSection {
        heading: "返品・返金について",
        paragraphs: &[
            "サービスの性質上、返品は承っておりません。",
            "作業内容に不備があった場合は、無償で補修対応いたします。",
        ],
        bullets: &[],
    },
    DocSection {
        heading: "その他の特記事項",
        paragraphs: &[],
        bullets: &[
            "作業に必要な電気・水道は、お客様のものを使用させていただきます。",
            "特殊な作業や機材が必要な場合は、別途料金が発生する場合があります。",
            "当社が責任を負うべき事由により損害が生じた場合、実際に生じた直接の損害に限り補償いたします。",
        ],
    },
];
